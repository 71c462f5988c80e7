//! The command set for the SSD1325.
//!
//! Note 1: The display RAM of the SSD1325 is arranged in 80 rows and 64 columns, where each column
//! is 2 adjacent pixels (segments) in the row for a total max resolution of 128x80. Each pixel is 4
//! bits/16 levels of intensity, so each column refers to exactly one byte. Anywhere there is a
//! "column" address, it refers to a horizontal pair of pixels.
//!
//! Note 2: Unlike most of its siblings, the SSD1325 expects command arguments on the command
//! channel (D/C low), so every byte produced here is sent with `send_commands`.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub mod consts {
    //! Geometry of the controller RAM and of the 128x64 panel driven by this crate.

    pub const NUM_BUF_COLS: u8 = 64;
    pub const NUM_BUF_ROWS: u8 = 80;
    pub const BUF_COL_MAX: u8 = NUM_BUF_COLS - 1;
    pub const BUF_ROW_MAX: u8 = NUM_BUF_ROWS - 1;

    /// Visible pixel columns of the panel.
    pub const PIXEL_COLS: i16 = 128;
    /// Visible pixel rows of the panel.
    pub const PIXEL_ROWS: i16 = 64;
    pub const PIXEL_COL_MAX: i16 = PIXEL_COLS - 1;
    pub const PIXEL_ROW_MAX: i16 = PIXEL_ROWS - 1;
}

use self::consts::*;

/// Length of the gray scale lookup table accepted by `BufCommand::SetGrayScaleTable`.
pub const GRAY_SCALE_TABLE_LEN: usize = 8;

/// Setting of the segment output current range. The contrast current set by
/// `Command::SetContrastCurrent` scales within this range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurrentRange {
    Quarter,
    Half,
    Full,
}

/// Setting of the display mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DisplayMode {
    /// The display operates normally, showing the image in the display RAM.
    Normal,
    /// Every pixel is lit at gray scale level 15, regardless of the display RAM.
    AllOn,
    /// Every pixel is dark, regardless of the display RAM.
    AllOff,
    /// The display shows the display RAM with the gray scale levels inverted.
    Inverse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Set the column start and end address range when writing to the display RAM. Range is
    /// 0-63. (Note 1)
    SetColumnAddress(u8, u8),
    /// Set the row start and end address range when writing to the display RAM. Range is 0-79.
    SetRowAddress(u8, u8),
    /// Set the contrast current. Range 0-127 on the datasheet; the value is passed through.
    SetContrastCurrent(u8),
    /// Select the segment output current range.
    SetCurrentRange(CurrentRange),
    /// Set the re-map register: address increment, column and nibble remapping, COM scan
    /// direction and COM split. Panel modules document the value they need; it is passed through
    /// as-is.
    SetRemap(u8),
    /// Set the display RAM row that is shown on the first COM line. Range is 0-79.
    SetStartLine(u8),
    /// Set the vertical COM line offset applied after the MUX ratio. Range is 0-79.
    SetDisplayOffset(u8),
    /// Set the display operating mode. See enum for details.
    SetDisplayMode(DisplayMode),
    /// Set the MUX ratio, the number of active COM lines. Range 16-80.
    SetMuxRatio(u8),
    /// Master configuration: selects the internal or external DC-DC converter.
    SetMasterConfig(u8),
    /// Control sleep mode. Sleep on turns the panel off.
    SetSleepMode(bool),
    /// Pre-charge compensation enable register.
    SetPrechargeCompensationEnable(u8),
    /// Phase 1 and phase 2 lengths, one per nibble.
    SetPhaseLength(u8),
    /// Row period in DCLKs.
    SetRowPeriod(u8),
    /// Oscillator frequency (high nibble) and front clock divider (low nibble).
    SetClock(u8),
    /// Pre-charge compensation level.
    SetPrechargeCompensation(u8),
    /// Pre-charge voltage level.
    SetPrechargeVoltage(u8),
    /// VCOMH (COM high voltage) level.
    SetVcomhLevel(u8),
    /// VSL (segment low voltage) level.
    SetSegmentLowVoltage(u8),
}

pub enum BufCommand<'buf> {
    /// Set the gray scale lookup table. Each of the 8 bytes packs the pulse widths of two
    /// consecutive gray scale levels, one per nibble.
    SetGrayScaleTable(&'buf [u8]),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {{
        $buf[0] = $cmd;
        Ok(&$buf[..1])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        Ok(&$buf[..2])
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $cmd;
        $buf[1] = $arg0;
        $buf[2] = $arg1;
        Ok(&$buf[..3])
    }};
}

impl Command {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        let mut buf = [0u8; 3];
        let bytes: &[u8] = match self {
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=BUF_COL_MAX, 0..=BUF_COL_MAX) => ok_command!(buf, 0x15, [start, end]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetRowAddress(start, end) => match (start, end) {
                (0..=BUF_ROW_MAX, 0..=BUF_ROW_MAX) => ok_command!(buf, 0x75, [start, end]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetContrastCurrent(current) => ok_command!(buf, 0x81, [current]),
            Command::SetCurrentRange(range) => ok_command!(
                buf,
                match range {
                    CurrentRange::Quarter => 0x84,
                    CurrentRange::Half => 0x85,
                    CurrentRange::Full => 0x86,
                },
                []
            ),
            Command::SetRemap(remap) => ok_command!(buf, 0xA0, [remap]),
            Command::SetStartLine(line) => match line {
                0..=BUF_ROW_MAX => ok_command!(buf, 0xA1, [line]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetDisplayOffset(line) => match line {
                0..=BUF_ROW_MAX => ok_command!(buf, 0xA2, [line]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetDisplayMode(mode) => ok_command!(
                buf,
                match mode {
                    DisplayMode::Normal => 0xA4,
                    DisplayMode::AllOn => 0xA5,
                    DisplayMode::AllOff => 0xA6,
                    DisplayMode::Inverse => 0xA7,
                },
                []
            ),
            Command::SetMuxRatio(ratio) => match ratio {
                16..=NUM_BUF_ROWS => ok_command!(buf, 0xA8, [ratio - 1]),
                _ => Err(Error::OutOfRange),
            },
            Command::SetMasterConfig(config) => ok_command!(buf, 0xAD, [config]),
            Command::SetSleepMode(ena) => ok_command!(
                buf,
                match ena {
                    true => 0xAE,
                    false => 0xAF,
                },
                []
            ),
            Command::SetPrechargeCompensationEnable(ena) => ok_command!(buf, 0xB0, [ena]),
            Command::SetPhaseLength(phases) => ok_command!(buf, 0xB1, [phases]),
            Command::SetRowPeriod(period) => ok_command!(buf, 0xB2, [period]),
            Command::SetClock(clock) => ok_command!(buf, 0xB3, [clock]),
            Command::SetPrechargeCompensation(level) => ok_command!(buf, 0xB4, [level]),
            Command::SetPrechargeVoltage(level) => ok_command!(buf, 0xBC, [level]),
            Command::SetVcomhLevel(level) => ok_command!(buf, 0xBE, [level]),
            Command::SetSegmentLowVoltage(level) => ok_command!(buf, 0xBF, [level]),
        }?;
        iface.send_commands(bytes)
    }
}

impl<'a> BufCommand<'a> {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error>
    where
        DI: DisplayInterface,
    {
        match self {
            BufCommand::SetGrayScaleTable(table) => {
                if table.len() != GRAY_SCALE_TABLE_LEN {
                    return Err(Error::OutOfRange);
                }
                iface.send_commands(&[0xB8])?;
                iface.send_commands(table)
            }
        }
    }
}
