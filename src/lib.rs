#![no_std]
//! # `ad9851` - Embedded driver for the AD9851 DDS synthesizer chip
//!
//! The AD9851 is a DDS Synthesizer chip sold by Analog Devices. Check the [datasheet](https://www.analog.com/media/en/technical-documentation/data-sheets/AD9851.pdf) for general information about it.
//!
//! This crate implements an interface for embedded devices to control such an AD9851 chip,
//! either over the 1-bit serial interface or over the 8-bit parallel interface.
//!
//! All the driver needs is a handful of digital output pins which implement the
//! [`embedded_hal::digital::v2::OutputPin`] trait. For parallel mode, the eight data lines
//! are handed in as a [`ParallelPort`], which is already implemented for `[P; 8]` of output pins.
//!
//! ## Usage example
//!
//! This example uses the [`arduino-hal`](https://github.com/Rahix/avr-hal). The `ad9851` library is not device specific though, so
//! it should be easy to adapt the example to other devices.
//!
//! ```ignore
//! #[arduino_hal::entry]
//! fn main() -> ! {
//!     let dp = arduino_hal::Peripherals::take().unwrap();
//!     let pins = arduino_hal::pins!(dp);
//!
//!     // Initialize the device
//!     let mut ad9851 = ad9851::Ad9851::new(
//!         pins.d4.into_output(), // Connect D4 (Arduino) to RESET (AD9851)
//!         pins.d5.into_output(), // Connect D5 (Arduino) to FQ_UD (AD9851)
//!         pins.d6.into_output(), // Connect D6 (Arduino) to W_CLK (AD9851)
//!         pins.d7.into_output(), // Connect D7 (Arduino) to DATA (AD9851)
//!     ).into_serial_mode().unwrap();
//!     //                   ^^^^ unwrap is ok here, since `set_low`/`set_high`
//!     //                        are infallible in the arduino-hal.
//!
//!     // Set output frequency to 10 MHz, shifted by 90 degrees
//!     let hz = ad9851.set_frequency(10_000_000).unwrap();
//!     let degrees = ad9851.set_phase(90).unwrap();
//! }
//! ```
//!
//! ## Supported features
//!
//! - [x] Reset the device
//! - [x] Program in Serial mode
//! - [x] Program in Parallel mode
//! - [x] 6x reference clock multiplier (always enabled)
//! - [ ] Power down / wakeup
//!
//! ## Quantization
//!
//! The chip cannot produce every frequency and phase exactly. The frequency is
//! programmed as a 32-bit tuning word relative to the (multiplied) reference clock,
//! the phase in 32 steps of $11.25°$. Both [`set_frequency`](Ad9851::set_frequency) and
//! [`set_phase`](Ad9851::set_phase) return the value that was *actually* programmed,
//! so a caller can compare it to what was requested.
//!
//! There is no readback path from the chip. A wrongly wired chip looks exactly like
//! a working one to this driver.
//!
//! ## A note about timing
//!
//! Communication with the AD9851 involves sending "pulses" on the
//! RESET, W_CLK and FQ_UD lines. According to the datasheet, these
//! pulses must be at least $3.5ns$ long for W_CLK and FQ_UD, and
//! RESET must stay high for at least 5 reference clock cycles.
//!
//! This implementation only inserts a [spin loop hint](core::hint::spin_loop)
//! between raising and lowering RESET. All other pulses are as long as
//! the two pin writes take, which depends on the CPU frequency of the
//! device this code is run on.

use core::marker::PhantomData;
use embedded_hal::digital::v2::OutputPin;
use log::{debug, trace};

/// Nominal frequency of the reference oscillator connected to the AD9851.
pub const DEFAULT_REFERENCE_CLOCK: u32 = 30_000_000;

/// Calibration trim (in Hz) added to the nominal reference clock.
///
/// Measure the output against a known frequency standard and adjust.
pub const DEFAULT_CALIBRATION: i32 = -339;

/// Factor by which the internal REFCLK multiplier scales the reference clock.
pub const REFCLK_MULTIPLIER: u32 = 6;

/// Phase resolution of the chip, in degrees.
pub const PHASE_STEP: f32 = 11.25;

/// Bit 0 of the control byte: enables the 6x REFCLK multiplier.
pub const MULTIPLIER_ENABLE: u8 = 1 << 0;

/// Reference clock settings used for the frequency calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Nominal reference oscillator frequency in Hz.
    pub reference_clock: u32,
    /// Signed trim in Hz, added to `reference_clock`.
    pub calibration: i32,
}

impl Config {
    /// Reference clock after calibration, before the 6x multiplier.
    pub fn effective_reference_clock(&self) -> u32 {
        self.reference_clock.wrapping_add_signed(self.calibration)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_clock: DEFAULT_REFERENCE_CLOCK,
            calibration: DEFAULT_CALIBRATION,
        }
    }
}

/// Which interface the chip was reset into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceMode {
    /// 1-bit loads on D7, selected by the W_CLK + FQ_UD pulse after reset.
    Serial,
    /// Byte-wide loads on D0..D7, the chip's default after reset.
    Parallel,
}

/// An 8-bit output port, connected to D0..D7 of the AD9851.
///
/// Implemented for `[P; 8]` of output pins, where index 0 is D0 and index 7 is D7.
/// If your device exposes a whole port register, implementing this trait directly
/// gets you single-write byte transfers.
pub trait ParallelPort {
    type Error;

    /// Put `byte` on the data lines.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<P: OutputPin> ParallelPort for [P; 8] {
    type Error = P::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        for (i, pin) in self.iter_mut().enumerate() {
            pin.set_state(((byte >> i) & 1 == 1).into())?;
        }
        Ok(())
    }
}

/// Transfers the driver's registers into the chip.
///
/// Implemented for [`Ad9851`] in [`mode::Serial`] and [`mode::Parallel`].
pub trait Transmit {
    type Error;

    /// Send the current frequency word and control byte, then latch them with a FQ_UD pulse.
    ///
    /// This is a low-level interface. [`set_frequency`](Ad9851::set_frequency) and
    /// [`set_phase`](Ad9851::set_phase) call it after updating the registers.
    fn transmit(&mut self) -> Result<(), Self::Error>;
}

/// Represents a connection to a AD9851 device.
///
/// See [crate level documentation](crate), or check the [`new`](Ad9851::new) method for an entry point.
pub struct Ad9851<Mode, Reset, FqUd, WClk, Data> {
    config: Config,
    factor: f64,
    frequency_word: u32,
    control_byte: u8,
    reset: Reset,
    fq_ud: FqUd,
    w_clk: WClk,
    data: Data,
    marker: PhantomData<Mode>,
}

impl<Reset, FqUd, WClk, Data> Ad9851<mode::Init, Reset, FqUd, WClk, Data> {
    /// Construct a new Ad9851 instance, in inital mode.
    ///
    /// This call does not communicate with the device yet. You need to call
    /// [`into_serial_mode`](Ad9851::into_serial_mode) or [`into_parallel_mode`](Ad9851::into_parallel_mode)
    /// to initiate a reset before you can send any data.
    ///
    /// Example:
    /// ```ignore
    /// let ad9851 = Ad9851::new(
    ///     pins.d4.into_output(),
    ///     pins.d5.into_output(),
    ///     pins.d6.into_output(),
    ///     pins.d7.into_output(),
    /// ).into_serial_mode().unwrap();
    /// ```
    ///
    /// The four parameters correspond to the digital pins connected to the AD9851:
    ///
    /// | Signal | AD9851 Pin |
    /// |--------|------------|
    /// | reset  |     22     |
    /// | fq_ud  |      7     |
    /// | w_clk  |      8     |
    /// | data   |     25     |
    ///
    /// In parallel mode, `data` is the whole D0..D7 bus (pins 4, 3, 2, 1, 28, 27, 26, 25) instead.
    ///
    /// NOTE: in serial mode, the "data" pin is D7. The datasheet also requires D0 and D1 to be
    ///   tied high and D2 to be tied low, otherwise the reset sequence leaves the chip in parallel mode.
    pub fn new(reset: Reset, fq_ud: FqUd, w_clk: WClk, data: Data) -> Self {
        Self::new_with_config(reset, fq_ud, w_clk, data, Config::default())
    }

    /// Same as [`new`](Ad9851::new), but allows the reference clock and its calibration to be specified.
    ///
    /// Use this if your board's oscillator is **not** 30 MHz, or needs a different trim.
    pub fn new_with_config(reset: Reset, fq_ud: FqUd, w_clk: WClk, data: Data, config: Config) -> Self {
        Self {
            config,
            factor: util::frequency_factor(&config),
            frequency_word: 0,
            control_byte: 0,
            reset,
            fq_ud,
            w_clk,
            data,
            marker: PhantomData,
        }
    }
}

impl<Reset, FqUd, WClk, Data, E> Ad9851<mode::Init, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: OutputPin<Error = E>,
{
    /// Reset the AD9851 device into serial mode.
    ///
    /// Afterwards the chip is programmed with 0 Hz and 0° phase.
    ///
    /// Returns an error, if any of the `set_low` / `set_high` calls on one of the pins fail.
    pub fn into_serial_mode(mut self) -> Result<Ad9851<mode::Serial, Reset, FqUd, WClk, Data>, E> {
        self.reset.set_low()?;
        self.fq_ud.set_low()?;
        self.w_clk.set_low()?;
        self.data.set_low()?;

        // RESET pulse resets the registers & mode to default
        self.pulse_reset()?;

        // single W_CLK pulse followed by FQ_UD pulse switches to serial input mode
        self.w_clk.set_high()?;
        self.w_clk.set_low()?;
        self.fq_ud.set_high()?;
        self.fq_ud.set_low()?;

        debug!("AD9851 reset into serial mode");
        let mut dds = self.into_mode();
        dds.set_phase(0)?;
        dds.set_frequency(0)?;
        Ok(dds)
    }
}

impl<Reset, FqUd, WClk, Data, E> Ad9851<mode::Init, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: ParallelPort<Error = E>,
{
    /// Reset the AD9851 device into parallel mode.
    ///
    /// Afterwards the chip is programmed with 0 Hz and 0° phase.
    ///
    /// Returns an error, if writing to any of the pins or the data port fails.
    pub fn into_parallel_mode(mut self) -> Result<Ad9851<mode::Parallel, Reset, FqUd, WClk, Data>, E> {
        self.reset.set_low()?;
        self.w_clk.set_low()?;
        self.data.write_byte(0x00)?;

        // parallel mode is the default after reset
        self.pulse_reset()?;

        debug!("AD9851 reset into parallel mode");
        let mut dds = self.into_mode();
        dds.set_phase(0)?;
        dds.set_frequency(0)?;
        Ok(dds)
    }
}

impl<Mode, Reset, FqUd, WClk, Data> Ad9851<Mode, Reset, FqUd, WClk, Data> {
    /// The frequency tuning word last handed to the chip.
    pub fn frequency_word(&self) -> u32 {
        self.frequency_word
    }

    /// The control byte (phase, power down and multiplier bits) last handed to the chip.
    pub fn control_byte(&self) -> u8 {
        self.control_byte
    }

    /// Output frequency (in Hz) that the current tuning word produces.
    pub fn frequency(&self) -> u32 {
        util::tuning_word_to_frequency(self.frequency_word, self.factor)
    }

    /// Phase offset (in degrees) that the current control byte produces.
    pub fn phase(&self) -> f32 {
        util::control_byte_to_phase(self.control_byte)
    }

    /// Reference clock settings the tuning words are computed with.
    pub fn config(&self) -> Config {
        self.config
    }

    /// The interface this driver talks to the chip with.
    pub fn mode(&self) -> InterfaceMode
    where
        Mode: mode::Configured,
    {
        Mode::MODE
    }

    /// Give back the pins, in the order they were passed to [`new`](Ad9851::new).
    pub fn release(self) -> (Reset, FqUd, WClk, Data) {
        (self.reset, self.fq_ud, self.w_clk, self.data)
    }

    fn into_mode<Next>(self) -> Ad9851<Next, Reset, FqUd, WClk, Data> {
        Ad9851 {
            config: self.config,
            factor: self.factor,
            frequency_word: self.frequency_word,
            control_byte: self.control_byte,
            reset: self.reset,
            fq_ud: self.fq_ud,
            w_clk: self.w_clk,
            data: self.data,
            marker: PhantomData,
        }
    }
}

impl<Mode, Reset: OutputPin, FqUd, WClk, Data> Ad9851<Mode, Reset, FqUd, WClk, Data> {
    fn pulse_reset(&mut self) -> Result<(), Reset::Error> {
        self.reset.set_high()?;
        core::hint::spin_loop();
        self.reset.set_low()
    }
}

impl<Mode, Reset, FqUd: OutputPin, WClk, Data> Ad9851<Mode, Reset, FqUd, WClk, Data> {
    fn latch(&mut self) -> Result<(), FqUd::Error> {
        // FQ_UD moves the 40 loaded bits into the active registers
        self.fq_ud.set_high()?;
        self.fq_ud.set_low()
    }
}

impl<Mode, Reset, FqUd, WClk, Data> Ad9851<Mode, Reset, FqUd, WClk, Data>
where
    Self: Transmit,
{
    /// Set output frequency to the given value (in Hz)
    ///
    /// Computes the tuning word for the configured reference clock and sends it,
    /// together with the current phase, to the chip.
    ///
    /// Returns the frequency that is actually produced. The highest useful output
    /// is about 70 MHz; anything above that aliases, and tuning words beyond 32 bits wrap around.
    pub fn set_frequency(&mut self, frequency: u32) -> Result<u32, <Self as Transmit>::Error> {
        self.frequency_word = util::frequency_to_tuning_word(frequency, self.factor);
        self.transmit()?;
        let actual = self.frequency();
        debug!("set frequency: requested {} Hz, programmed {} Hz", frequency, actual);
        Ok(actual)
    }

    /// Set output phase to the given value (in degrees)
    ///
    /// Any integer is accepted and taken modulo 360. The phase is rounded down to the
    /// next multiple of [`PHASE_STEP`] and sent, together with the current frequency, to the chip.
    ///
    /// Negative inputs wrap Euclidean-style (`-100` becomes `260`, then `258.75`), unlike
    /// the truncating `%` of the Arduino AD9851 library, which would program 270° for `-100`.
    ///
    /// Returns the phase that is actually produced, in the range `0.0..=348.75`.
    pub fn set_phase(&mut self, phase: i32) -> Result<f32, <Self as Transmit>::Error> {
        self.control_byte = util::phase_to_control_byte(phase);
        self.transmit()?;
        let actual = self.phase();
        debug!("set phase: requested {}°, programmed {}°", phase, actual);
        Ok(actual)
    }
}

impl<Reset, FqUd, WClk, Data, E> Ad9851<mode::Serial, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: OutputPin<Error = E>,
{
    fn shift_out(&mut self, value: u32, bits: u32) -> Result<(), E> {
        // shift out to DATA, at rising edge of W_CLK (LSB first)
        for i in 0..bits {
            self.data.set_state(((value >> i) & 1 == 1).into())?;
            self.w_clk.set_high()?;
            self.w_clk.set_low()?;
        }
        Ok(())
    }
}

impl<Reset, FqUd, WClk, Data, E> Transmit for Ad9851<mode::Serial, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: OutputPin<Error = E>,
{
    type Error = E;

    /// The AD9851 register is 40-bit wide:
    /// - The first 32 bit are the "tuning word", which determines the frequency
    /// - Next bit enables the 6x REFCLK multiplier
    /// - Next bit is reserved and must be zero
    /// - This is followed by a single "power down" bit
    /// - The remaining 5 bits determine the "phase" by which the output signal is shifted.
    fn transmit(&mut self) -> Result<(), E> {
        trace!(
            "serial transfer: tuning word {:#010x}, control {:#04x}",
            self.frequency_word,
            self.control_byte
        );
        self.shift_out(self.frequency_word, 32)?;
        self.shift_out(self.control_byte as u32, 8)?;
        self.latch()
    }
}

impl<Reset, FqUd, WClk, Data, E> Ad9851<mode::Parallel, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: ParallelPort<Error = E>,
{
    fn write_word(&mut self, byte: u8) -> Result<(), E> {
        self.w_clk.set_high()?;
        self.data.write_byte(byte)?;
        self.w_clk.set_low()
    }
}

impl<Reset, FqUd, WClk, Data, E> Transmit for Ad9851<mode::Parallel, Reset, FqUd, WClk, Data>
where
    Reset: OutputPin<Error = E>,
    FqUd: OutputPin<Error = E>,
    WClk: OutputPin<Error = E>,
    Data: ParallelPort<Error = E>,
{
    type Error = E;

    /// Writes bits 31..8 of the tuning word (MSB first), then the control byte.
    ///
    /// Bits 7..0 of the tuning word are not sent in this framing, so the chip keeps
    /// whatever it had there (zero after reset). Needs confirming against the datasheet's
    /// W0..W4 load order before changing.
    fn transmit(&mut self) -> Result<(), E> {
        trace!(
            "parallel transfer: tuning word {:#010x}, control {:#04x}",
            self.frequency_word,
            self.control_byte
        );
        let word = self.frequency_word;
        for shift in [24, 16, 8] {
            self.write_word((word >> shift & 0xFF) as u8)?;
        }
        self.write_word(self.control_byte)?;
        self.latch()
    }
}

/// Utility functions
///
/// Pure register math, no I/O.
pub mod util {
    use crate::{Config, MULTIPLIER_ENABLE, PHASE_STEP, REFCLK_MULTIPLIER};

    /// Tuning word per Hz of output frequency: $ \frac{2^{32}}{6 \cdot f_{ref}} $
    pub fn frequency_factor(config: &Config) -> f64 {
        4294967296.0 / (config.effective_reference_clock() as f64 * REFCLK_MULTIPLIER as f64)
    }

    /// Rounds half up. Words beyond 32 bits wrap around.
    ///
    /// ```
    /// # use ad9851::{Config, util::{frequency_factor, frequency_to_tuning_word}};
    /// let factor = frequency_factor(&Config::default());
    /// assert_eq!(238611991, frequency_to_tuning_word(10_000_000, factor));
    /// ```
    pub fn frequency_to_tuning_word(frequency: u32, factor: f64) -> u32 {
        (frequency as f64 * factor + 0.5) as u64 as u32
    }

    pub fn tuning_word_to_frequency(tuning_word: u32, factor: f64) -> u32 {
        (tuning_word as f64 / factor + 0.5) as u64 as u32
    }

    /// 5-bit phase code (0..=31) for the given phase in degrees.
    ///
    /// The phase is reduced into `0..360` first, so negative values count backwards from 360.
    pub fn phase_to_code(phase: i32) -> u8 {
        // 11.25° per step == 4 steps per 45°
        (phase.rem_euclid(360) * 4 / 45) as u8
    }

    /// Turns phase into AD9851 control byte format.
    ///
    /// Phase code in bits 7..3, power down (bit 2) and the reserved bit 1 cleared,
    /// REFCLK multiplier (bit 0) enabled.
    ///
    /// Example:
    /// ```
    /// # use ad9851::util::phase_to_control_byte;
    /// assert_eq!(0b00000001, phase_to_control_byte(0));
    /// assert_eq!(0b01000001, phase_to_control_byte(90));
    /// assert_eq!(0b11000001, phase_to_control_byte(-90));
    /// ```
    pub fn phase_to_control_byte(phase: i32) -> u8 {
        phase_to_code(phase) << 3 | MULTIPLIER_ENABLE
    }

    pub fn control_byte_to_phase(control_byte: u8) -> f32 {
        ((control_byte & !MULTIPLIER_ENABLE) >> 3) as f32 * PHASE_STEP
    }
}

/// Marker types for different modes.
///
/// These types are used for the `Mode` type parameter of [`Ad9851`].
pub mod mode {
    use crate::InterfaceMode;

    /// Initial mode. No communication has happened.
    pub struct Init;
    /// Serial mode. Device is reset and put into the proper mode. Updates can happen.
    pub struct Serial;
    /// Parallel mode. Device is reset. Updates can happen over the 8-bit data port.
    pub struct Parallel;

    /// Modes in which the chip has been reset and can be programmed.
    pub trait Configured {
        const MODE: InterfaceMode;
    }

    impl Configured for Serial {
        const MODE: InterfaceMode = InterfaceMode::Serial;
    }

    impl Configured for Parallel {
        const MODE: InterfaceMode = InterfaceMode::Parallel;
    }
}

#[cfg(test)]
mod tests {
    use super::util::*;
    use super::*;

    fn factor() -> f64 {
        frequency_factor(&Config::default())
    }

    #[test]
    fn effective_reference_clock_applies_trim() {
        assert_eq!(29_999_661, Config::default().effective_reference_clock());
        let config = Config { reference_clock: 30_000_000, calibration: 120 };
        assert_eq!(30_000_120, config.effective_reference_clock());
    }

    #[test]
    fn frequency_factor_for_trimmed_30mhz() {
        let expected = 4294967296.0 / (29_999_661.0 * 6.0);
        assert!((factor() - expected).abs() < 1e-12);
    }

    #[test]
    fn known_tuning_words() {
        assert_eq!(0, frequency_to_tuning_word(0, factor()));
        assert_eq!(24, frequency_to_tuning_word(1, factor()));
        assert_eq!(23861199, frequency_to_tuning_word(1_000_000, factor()));
        assert_eq!(0x638e_829e, frequency_to_tuning_word(70_000_000, factor()));
    }

    #[test]
    fn tuning_word_wraps_instead_of_saturating() {
        // u32::MAX Hz needs a 37-bit tuning word
        let word = frequency_to_tuning_word(u32::MAX, factor());
        assert_eq!(3_698_821_747, word);
        assert_eq!(155_014_077, tuning_word_to_frequency(word, factor()));
    }

    #[test]
    fn quantization_stays_within_one_step() {
        let max_error = (1.0 / factor()).ceil() as u32;
        for f in (0..=70_000_000u32).step_by(9_973).chain([70_000_000]) {
            let actual = tuning_word_to_frequency(frequency_to_tuning_word(f, factor()), factor());
            assert!(actual.abs_diff(f) <= max_error, "{} -> {}", f, actual);
            let again = tuning_word_to_frequency(frequency_to_tuning_word(actual, factor()), factor());
            assert_eq!(actual, again);
        }
    }

    #[test]
    fn phase_codes() {
        assert_eq!(0, phase_to_code(0));
        assert_eq!(0, phase_to_code(11));
        assert_eq!(1, phase_to_code(12));
        assert_eq!(8, phase_to_code(90));
        assert_eq!(31, phase_to_code(359));
        assert_eq!(0, phase_to_code(360));
        assert_eq!(24, phase_to_code(-90));
        assert_eq!(23, phase_to_code(-100));
        assert_eq!(phase_to_code(i32::MIN.rem_euclid(360)), phase_to_code(i32::MIN));
    }

    #[test]
    fn control_byte_layout() {
        for phase in -720..720 {
            let byte = phase_to_control_byte(phase);
            assert_eq!(MULTIPLIER_ENABLE, byte & 0b111);
            assert_eq!(phase_to_code(phase), byte >> 3);
        }
    }

    #[test]
    fn phase_round_trip_is_periodic_and_bounded() {
        for phase in -1000..1000 {
            let actual = control_byte_to_phase(phase_to_control_byte(phase));
            assert!((0.0..=348.75).contains(&actual));
            assert_eq!(0.0, actual % PHASE_STEP);
            assert_eq!(actual, control_byte_to_phase(phase_to_control_byte(phase + 360)));
        }
        assert_eq!(90.0, control_byte_to_phase(phase_to_control_byte(90)));
        assert_eq!(270.0, control_byte_to_phase(phase_to_control_byte(-90)));
    }
}
