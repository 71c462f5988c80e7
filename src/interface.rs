//! Transports that move command and image bytes to the SSD1325.

use core::convert::Infallible;

use hal::digital::v2::OutputPin;

use crate::error::Error;

pub trait DisplayInterface {
    /// Send bytes on the command channel (D/C low). Command arguments travel this way too.
    fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error>;
    /// Send bytes on the data channel (D/C high) as a single uninterrupted burst.
    fn send_data<I>(&mut self, data: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = u8>;
}

/// Stand-in chip select for modules whose serial bus is dedicated to the display. All level
/// changes succeed and do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChipSelect;

impl OutputPin for NoChipSelect {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

pub mod bitbang {
    //! The bit-banged interface drives the serial bus directly from four GPIO outputs: serial
    //! clock, serial data, D/C and chip select. There is no clock rate to configure: the bus runs
    //! as fast as the host can toggle its pins, which the SSD1325 tolerates.

    use hal::digital::v2::OutputPin;

    use super::{DisplayInterface, NoChipSelect};
    use crate::error::Error;

    pub struct BitBangInterface<SCLK, SID, DC, CS> {
        /// Serial clock. Data is latched by the SSD1325 on the rising edge.
        sclk: SCLK,
        /// Serial data in of the SSD1325.
        sid: SID,
        /// A GPIO output pin connected to the D/C (data/command) pin of the SSD1325.
        dc: DC,
        /// Active-low chip select.
        cs: CS,
    }

    impl<SCLK, SID, DC, CS> BitBangInterface<SCLK, SID, DC, CS>
    where
        SCLK: OutputPin,
        SID: OutputPin,
        DC: OutputPin,
        CS: OutputPin,
    {
        /// Create a new bit-banged interface from the four signal lines of the 5-pin wiring (the
        /// fifth, reset, is only needed by `Display::reset`). All pins must already be configured
        /// as push-pull outputs.
        pub fn new(sclk: SCLK, sid: SID, dc: DC, cs: CS) -> Self {
            Self { sclk, sid, dc, cs }
        }

        /// Give back the pins.
        pub fn release(self) -> (SCLK, SID, DC, CS) {
            (self.sclk, self.sid, self.dc, self.cs)
        }

        /// Pull chip select low with D/C at the requested level. Chip select is first raised so
        /// that D/C never changes while the controller is selected.
        fn select(&mut self, data: bool) -> Result<(), Error> {
            self.cs.set_high().map_err(|_| Error::Pin)?;
            if data {
                self.dc.set_high().map_err(|_| Error::Pin)?;
            } else {
                self.dc.set_low().map_err(|_| Error::Pin)?;
            }
            self.cs.set_low().map_err(|_| Error::Pin)
        }

        fn deselect(&mut self) -> Result<(), Error> {
            self.cs.set_high().map_err(|_| Error::Pin)
        }

        /// Shift one byte out, most significant bit first.
        fn write_byte(&mut self, byte: u8) -> Result<(), Error> {
            for bit in (0..8).rev() {
                self.sclk.set_low().map_err(|_| Error::Pin)?;
                if byte & (1 << bit) != 0 {
                    self.sid.set_high().map_err(|_| Error::Pin)?;
                } else {
                    self.sid.set_low().map_err(|_| Error::Pin)?;
                }
                self.sclk.set_high().map_err(|_| Error::Pin)?;
            }
            Ok(())
        }
    }

    impl<SCLK, SID, DC> BitBangInterface<SCLK, SID, DC, NoChipSelect>
    where
        SCLK: OutputPin,
        SID: OutputPin,
        DC: OutputPin,
    {
        /// Create a bit-banged interface for the 4-pin wiring, where chip select is tied low.
        pub fn without_chip_select(sclk: SCLK, sid: SID, dc: DC) -> Self {
            Self::new(sclk, sid, dc, NoChipSelect)
        }
    }

    impl<SCLK, SID, DC, CS> DisplayInterface for BitBangInterface<SCLK, SID, DC, CS>
    where
        SCLK: OutputPin,
        SID: OutputPin,
        DC: OutputPin,
        CS: OutputPin,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error> {
            // Every command byte gets its own chip select frame.
            for &cmd in cmds {
                self.select(false)?;
                self.write_byte(cmd)?;
                self.deselect()?;
            }
            Ok(())
        }

        fn send_data<I>(&mut self, data: I) -> Result<(), Error>
        where
            I: IntoIterator<Item = u8>,
        {
            self.select(true)?;
            for byte in data {
                self.write_byte(byte)?;
            }
            self.deselect()
        }
    }
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the driver, such that each word on the
    //! SPI bus is 8 bits, for hosts that would rather hand the shifting to a hardware peripheral.
    //! The peripheral must be set up for SPI mode 3 (clock idles high, data captured on the rising
    //! edge), MSB first.

    use hal::blocking::spi::{Write, WriteIter};
    use hal::digital::v2::OutputPin;

    use super::DisplayInterface;
    use crate::error::Error;

    pub struct SpiInterface<SPI, DC, CS> {
        /// The SPI master device connected to the SSD1325.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the SSD1325.
        dc: DC,
        /// Active-low chip select. Use `NoChipSelect` if the bus is dedicated to the display.
        cs: CS,
    }

    impl<SPI, DC, CS> SpiInterface<SPI, DC, CS>
    where
        SPI: Write<u8> + WriteIter<u8>,
        DC: OutputPin,
        CS: OutputPin,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, `dc` is the GPIO output pin connected to the D/C pin of the SSD1325 and
        /// `cs` the one connected to its chip select.
        pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
            Self { spi, dc, cs }
        }

        /// Give back the SPI device and pins.
        pub fn release(self) -> (SPI, DC, CS) {
            (self.spi, self.dc, self.cs)
        }

        fn select(&mut self, data: bool) -> Result<(), Error> {
            self.cs.set_high().map_err(|_| Error::Pin)?;
            if data {
                self.dc.set_high().map_err(|_| Error::Pin)?;
            } else {
                self.dc.set_low().map_err(|_| Error::Pin)?;
            }
            self.cs.set_low().map_err(|_| Error::Pin)
        }
    }

    impl<SPI, DC, CS> DisplayInterface for SpiInterface<SPI, DC, CS>
    where
        SPI: Write<u8> + WriteIter<u8>,
        DC: OutputPin,
        CS: OutputPin,
    {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), Error> {
            self.select(false)?;
            Write::write(&mut self.spi, cmds).map_err(|_| Error::Bus)?;
            self.cs.set_high().map_err(|_| Error::Pin)
        }

        fn send_data<I>(&mut self, data: I) -> Result<(), Error>
        where
            I: IntoIterator<Item = u8>,
        {
            self.select(true)?;
            WriteIter::write_iter(&mut self.spi, data).map_err(|_| Error::Bus)?;
            self.cs.set_high().map_err(|_| Error::Pin)
        }
    }
}


#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use hal::blocking::spi::{Write, WriteIter};
    use hal::digital::v2::OutputPin;

    use super::bitbang::BitBangInterface;
    use super::spi::SpiInterface;
    use super::{DisplayInterface, NoChipSelect};
    use crate::error::Error;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Line {
        Sclk,
        Sid,
        Dc,
        Cs,
    }

    type Log = Rc<RefCell<Vec<(Line, bool)>>>;

    struct MockPin {
        line: Line,
        log: Log,
    }

    impl OutputPin for MockPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    struct BrokenPin;

    impl OutputPin for BrokenPin {
        type Error = ();

        fn set_low(&mut self) -> Result<(), ()> {
            Err(())
        }

        fn set_high(&mut self) -> Result<(), ()> {
            Err(())
        }
    }

    fn mock_iface() -> (BitBangInterface<MockPin, MockPin, MockPin, MockPin>, Log) {
        let log = Log::default();
        let pin = |line| MockPin {
            line,
            log: log.clone(),
        };
        let iface = BitBangInterface::new(
            pin(Line::Sclk),
            pin(Line::Sid),
            pin(Line::Dc),
            pin(Line::Cs),
        );
        (iface, log)
    }

    /// Replay the pin log like the controller would: sample SID on every rising clock edge while
    /// chip select is low, and return each completed byte with the D/C level it was sent under.
    fn decode(log: &[(Line, bool)]) -> Vec<(bool, u8)> {
        let (mut sid, mut dc, mut cs) = (false, false, true);
        let (mut shift, mut bits) = (0u8, 0);
        let mut out = Vec::new();
        for &(line, level) in log {
            match line {
                Line::Sid => sid = level,
                Line::Dc => dc = level,
                Line::Cs => {
                    cs = level;
                    bits = 0;
                }
                Line::Sclk if level && !cs => {
                    shift = shift << 1 | sid as u8;
                    bits += 1;
                    if bits == 8 {
                        out.push((dc, shift));
                        bits = 0;
                    }
                }
                Line::Sclk => {}
            }
        }
        out
    }

    #[test]
    fn command_framing() {
        let (mut iface, log) = mock_iface();
        iface.send_commands(&[0x80]).unwrap();
        let mut expected = vec![(Line::Cs, true), (Line::Dc, false), (Line::Cs, false)];
        // MSB first: only the first bit is high.
        for bit in (0..8).rev() {
            expected.push((Line::Sclk, false));
            expected.push((Line::Sid, bit == 7));
            expected.push((Line::Sclk, true));
        }
        expected.push((Line::Cs, true));
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn each_command_byte_is_framed() {
        let (mut iface, log) = mock_iface();
        iface.send_commands(&[0x15, 0x00, 0x3F]).unwrap();
        let frames = log
            .borrow()
            .iter()
            .filter(|&&entry| entry == (Line::Cs, false))
            .count();
        assert_eq!(frames, 3);
        assert_eq!(
            decode(&log.borrow()),
            vec![(false, 0x15), (false, 0x00), (false, 0x3F)]
        );
    }

    #[test]
    fn data_is_one_burst() {
        let (mut iface, log) = mock_iface();
        iface.send_data([0xF0, 0x0F, 0xA5].iter().cloned()).unwrap();
        let frames = log
            .borrow()
            .iter()
            .filter(|&&entry| entry == (Line::Cs, false))
            .count();
        assert_eq!(frames, 1);
        assert_eq!(
            &log.borrow()[..3],
            &[(Line::Cs, true), (Line::Dc, true), (Line::Cs, false)]
        );
        assert_eq!(log.borrow().last(), Some(&(Line::Cs, true)));
        assert_eq!(
            decode(&log.borrow()),
            vec![(true, 0xF0), (true, 0x0F), (true, 0xA5)]
        );
    }

    #[test]
    fn single_data_byte() {
        let (mut iface, log) = mock_iface();
        iface.send_data(Some(0x5A)).unwrap();
        assert_eq!(decode(&log.borrow()), vec![(true, 0x5A)]);
    }

    #[test]
    fn without_chip_select() {
        let log = Log::default();
        let pin = |line| MockPin {
            line,
            log: log.clone(),
        };
        let mut iface =
            BitBangInterface::without_chip_select(pin(Line::Sclk), pin(Line::Sid), pin(Line::Dc));
        iface.send_commands(&[0xAF]).unwrap();
        assert!(log.borrow().iter().all(|&(line, _)| line != Line::Cs));
        // No chip select in the log, so sample every rising edge.
        let byte = log
            .borrow()
            .iter()
            .fold((0u8, false), |(acc, sid), &(line, level)| match line {
                Line::Sid => (acc, level),
                Line::Sclk if level => (acc << 1 | sid as u8, sid),
                _ => (acc, sid),
            })
            .0;
        assert_eq!(byte, 0xAF);
    }

    struct MockSpi {
        log: Rc<RefCell<Vec<u8>>>,
        fail: bool,
    }

    impl Write<u8> for MockSpi {
        type Error = ();

        fn write(&mut self, words: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.log.borrow_mut().extend_from_slice(words);
            Ok(())
        }
    }

    impl WriteIter<u8> for MockSpi {
        type Error = ();

        fn write_iter<WI>(&mut self, words: WI) -> Result<(), ()>
        where
            WI: IntoIterator<Item = u8>,
        {
            if self.fail {
                return Err(());
            }
            self.log.borrow_mut().extend(words);
            Ok(())
        }
    }

    #[test]
    fn spi_framing() {
        let log = Log::default();
        let bytes = Rc::new(RefCell::new(Vec::new()));
        let spi = MockSpi {
            log: bytes.clone(),
            fail: false,
        };
        let dc = MockPin {
            line: Line::Dc,
            log: log.clone(),
        };
        let cs = MockPin {
            line: Line::Cs,
            log: log.clone(),
        };
        let mut iface = SpiInterface::new(spi, dc, cs);
        iface.send_commands(&[0x15, 0x00, 0x3F]).unwrap();
        iface.send_data([0xF0, 0x0F].iter().cloned()).unwrap();
        assert_eq!(*bytes.borrow(), vec![0x15, 0x00, 0x3F, 0xF0, 0x0F]);
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(
            *log.borrow(),
            vec![
                (Line::Cs, true), (Line::Dc, false), (Line::Cs, false), (Line::Cs, true),
                (Line::Cs, true), (Line::Dc, true), (Line::Cs, false), (Line::Cs, true),
            ]
        );
    }

    #[test]
    fn spi_failure() {
        let spi = MockSpi {
            log: Rc::new(RefCell::new(Vec::new())),
            fail: true,
        };
        let mut iface = SpiInterface::new(spi, NoChipSelect, NoChipSelect);
        assert_eq!(iface.send_commands(&[0xAE]), Err(Error::Bus));
        assert_eq!(iface.send_data(Some(0x00)), Err(Error::Bus));
    }

    #[test]
    fn pin_failure() {
        let log = Log::default();
        let pin = |line| MockPin {
            line,
            log: log.clone(),
        };
        let mut iface =
            BitBangInterface::new(BrokenPin, pin(Line::Sid), pin(Line::Dc), NoChipSelect);
        assert_eq!(iface.send_commands(&[0xAE]), Err(Error::Pin));
        assert_eq!(iface.send_data(Some(0x00)), Err(Error::Pin));
        assert_eq!(iface.send_commands(&[]), Ok(()));
    }
}
