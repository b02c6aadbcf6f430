//! TM1637 bus protocol
//!
//! The TM1637 talks a 2-wire protocol that looks like I2C but is not: there is no
//! device address and bytes go out least significant bit first. This module
//! bit-bangs it on top of a [`BusInterface`].
//!
//! ## Framing
//!
//! - Start: DIO falls while CLK is high
//! - Stop: DIO rises while CLK is high
//! - Data: DIO changes while CLK is low and is read by the controller on the rising edge
//! - Ack: after the 8th bit the master releases DIO and pulses CLK; the controller
//!   holds DIO low to acknowledge
//!
//! Every group of line changes is followed by the configured bit delay. The
//! controller misreads bits when transitions come faster than that.

use embedded_hal::digital::PinState;

use crate::interface::BusInterface;

type BusResult<T, I> = core::result::Result<T, <I as BusInterface>::Error>;

/// Bit-level protocol driver for one CLK/DIO pin pair
pub struct Bus<I> {
    interface: I,
    bit_delay_us: u32,
}

impl<I> Bus<I>
where
    I: BusInterface,
{
    /// Create a new bus with a fixed delay between transitions
    pub fn new(interface: I, bit_delay_us: u32) -> Self {
        Self {
            interface,
            bit_delay_us,
        }
    }

    /// Delay between transitions in microseconds
    pub fn bit_delay_us(&self) -> u32 {
        self.bit_delay_us
    }

    /// Signal the start of a transaction
    pub fn start(&mut self) -> BusResult<(), I> {
        self.interface.set_clk(PinState::High)?;
        self.interface.set_dio(PinState::High)?;
        self.bit_delay();
        self.interface.set_dio(PinState::Low)?;
        self.bit_delay();
        Ok(())
    }

    /// Signal the end of a transaction
    pub fn stop(&mut self) -> BusResult<(), I> {
        self.interface.set_clk(PinState::Low)?;
        self.bit_delay();
        self.interface.set_dio(PinState::Low)?;
        self.bit_delay();
        self.interface.set_clk(PinState::High)?;
        self.bit_delay();
        self.interface.set_dio(PinState::High)?;
        self.bit_delay();
        Ok(())
    }

    /// Shift one byte out, LSB first, and sample the acknowledgment
    ///
    /// Returns `true` when the controller pulled DIO low in the ack slot. A missing
    /// ack is not an error; the caller decides whether it matters.
    pub fn write_byte(&mut self, byte: u8) -> BusResult<bool, I> {
        let mut data = byte;
        for _ in 0..8 {
            self.interface.set_clk(PinState::Low)?;
            self.bit_delay();
            self.interface.set_dio(PinState::from(data & 0x01 != 0))?;
            self.bit_delay();
            self.interface.set_clk(PinState::High)?;
            self.bit_delay();
            data >>= 1;
        }

        // Ninth clock: controller drives DIO
        self.interface.set_clk(PinState::Low)?;
        self.bit_delay();
        self.interface.release_dio()?;
        self.bit_delay();
        self.interface.set_clk(PinState::High)?;
        self.bit_delay();
        let ack = self.interface.read_dio()? == PinState::Low;

        // Take DIO back low before the controller lets go of it
        self.interface.set_clk(PinState::Low)?;
        self.bit_delay();
        self.interface.set_dio(PinState::Low)?;
        self.bit_delay();

        log::trace!("byte {byte:#04x} ack={ack}");
        if !ack {
            log::debug!("no ack for byte {byte:#04x}");
        }
        Ok(ack)
    }

    /// Send one framed transaction: start, `command`, every byte of `data`, stop
    ///
    /// Returns how many of the `1 + data.len()` bytes were acknowledged.
    pub fn transaction(&mut self, command: u8, data: &[u8]) -> BusResult<usize, I> {
        self.start()?;
        let mut acked = usize::from(self.write_byte(command)?);
        for byte in data {
            acked += usize::from(self.write_byte(*byte)?);
        }
        self.stop()?;
        Ok(acked)
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Give back the underlying interface
    pub fn release(self) -> I {
        self.interface
    }

    fn bit_delay(&mut self) {
        self.interface.delay_us(self.bit_delay_us);
    }
}
