//! A fake bus that records every line change, across all lines, in order.
#![allow(dead_code)]

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use ad9851::ParallelPort;
use embedded_hal::digital::v2::OutputPin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Reset,
    FqUd,
    WClk,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(Line),
    Low(Line),
    Byte(u8),
}

#[derive(Clone, Default)]
pub struct Bus {
    log: Rc<RefCell<Vec<Event>>>,
}

impl Bus {
    pub fn pin(&self, line: Line) -> Probe {
        Probe { line, log: self.log.clone() }
    }

    pub fn port(&self) -> PortProbe {
        PortProbe { log: self.log.clone() }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

pub struct Probe {
    line: Line,
    log: Rc<RefCell<Vec<Event>>>,
}

impl OutputPin for Probe {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Low(self.line));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::High(self.line));
        Ok(())
    }
}

pub struct PortProbe {
    log: Rc<RefCell<Vec<Event>>>,
}

impl ParallelPort for PortProbe {
    type Error = Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
        self.log.borrow_mut().push(Event::Byte(byte));
        Ok(())
    }
}

/// Bits sampled on each rising W_CLK edge, from the DATA level at that moment.
pub fn sampled_bits(events: &[Event]) -> Vec<bool> {
    let mut data = false;
    let mut bits = Vec::new();
    for event in events {
        match event {
            Event::High(Line::Data) => data = true,
            Event::Low(Line::Data) => data = false,
            Event::High(Line::WClk) => bits.push(data),
            _ => {}
        }
    }
    bits
}

/// Bytes on the port at each falling W_CLK edge.
pub fn clocked_bytes(events: &[Event]) -> Vec<u8> {
    let mut port = None;
    let mut bytes = Vec::new();
    for event in events {
        match event {
            Event::Byte(b) => port = Some(*b),
            Event::Low(Line::WClk) => bytes.extend(port),
            _ => {}
        }
    }
    bytes
}

pub fn count(events: &[Event], wanted: Event) -> usize {
    events.iter().filter(|e| **e == wanted).count()
}

/// Unpack `bits` (LSB first) into an integer.
pub fn lsb_first(bits: &[bool]) -> u64 {
    bits.iter().enumerate().fold(0, |acc, (i, bit)| acc | (*bit as u64) << i)
}
