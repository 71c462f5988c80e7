//! Defines structs for storing register values of commands in the SSD1325 that are associated with
//! relatively-static configuration.

use log::debug;

use crate::command::*;
use crate::error::Error;
use crate::interface;

/// Gray scale table of the 128x64 monochrome modules. Only levels 0 and 15 are ever displayed by
/// this driver, but the controller still needs a monotonic table.
pub const DEFAULT_GRAY_SCALE_TABLE: [u8; GRAY_SCALE_TABLE_LEN] =
    [0x01, 0x11, 0x22, 0x32, 0x43, 0x54, 0x65, 0x76];

/// A configuration for the display. `Config::default()` is the calibration of the common 128x64
/// SSD1325 modules and must be reproduced exactly for them; builder methods replace single
/// registers for other panels.
#[derive(Clone, Debug)]
pub struct Config {
    clock_cmd: Command,
    mux_ratio_cmd: Command,
    display_offset_cmd: Command,
    start_line_cmd: Command,
    master_config_cmd: Command,
    remap_cmd: Command,
    current_range_cmd: Command,
    gray_scale_table: [u8; GRAY_SCALE_TABLE_LEN],
    contrast_current_cmd: Command,
    row_period_cmd: Command,
    phase_length_cmd: Command,
    precharge_compensation_cmd: Command,
    precharge_compensation_enable_cmd: Command,
    vcomh_level_cmd: Command,
    segment_low_voltage_cmd: Command,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clock_cmd: Command::SetClock(0xF1),
            mux_ratio_cmd: Command::SetMuxRatio(64),
            display_offset_cmd: Command::SetDisplayOffset(0x4C),
            start_line_cmd: Command::SetStartLine(0),
            master_config_cmd: Command::SetMasterConfig(0x02),
            remap_cmd: Command::SetRemap(0x56),
            current_range_cmd: Command::SetCurrentRange(CurrentRange::Full),
            gray_scale_table: DEFAULT_GRAY_SCALE_TABLE,
            contrast_current_cmd: Command::SetContrastCurrent(0x7F),
            row_period_cmd: Command::SetRowPeriod(0x51),
            phase_length_cmd: Command::SetPhaseLength(0x55),
            precharge_compensation_cmd: Command::SetPrechargeCompensation(0x02),
            precharge_compensation_enable_cmd: Command::SetPrechargeCompensationEnable(0x28),
            vcomh_level_cmd: Command::SetVcomhLevel(0x1C),
            segment_low_voltage_cmd: Command::SetSegmentLowVoltage(0x0D | 0x02),
        }
    }
}

impl Config {
    /// Create the default configuration. Same as `Config::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend this `Config` to configure oscillator frequency and clock divider. See
    /// `Command::SetClock`.
    pub fn clock(self, clock: u8) -> Self {
        Self {
            clock_cmd: Command::SetClock(clock),
            ..self
        }
    }

    /// Extend this `Config` to configure the number of active COM lines. See
    /// `Command::SetMuxRatio`.
    pub fn mux_ratio(self, ratio: u8) -> Self {
        Self {
            mux_ratio_cmd: Command::SetMuxRatio(ratio),
            ..self
        }
    }

    /// Extend this `Config` to configure the COM line offset. See `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset_cmd: Command::SetDisplayOffset(offset),
            ..self
        }
    }

    /// Extend this `Config` to configure the display start line. See `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line_cmd: Command::SetStartLine(line),
            ..self
        }
    }

    /// Extend this `Config` to configure the DC-DC converter selection. See
    /// `Command::SetMasterConfig`.
    pub fn master_config(self, config: u8) -> Self {
        Self {
            master_config_cmd: Command::SetMasterConfig(config),
            ..self
        }
    }

    /// Extend this `Config` to configure the re-map register. See `Command::SetRemap`.
    pub fn remap(self, remap: u8) -> Self {
        Self {
            remap_cmd: Command::SetRemap(remap),
            ..self
        }
    }

    /// Extend this `Config` to configure the segment current range. See
    /// `Command::SetCurrentRange`.
    pub fn current_range(self, range: CurrentRange) -> Self {
        Self {
            current_range_cmd: Command::SetCurrentRange(range),
            ..self
        }
    }

    /// Extend this `Config` to configure the gray scale lookup table. See
    /// `BufCommand::SetGrayScaleTable`.
    pub fn gray_scale_table(self, table: [u8; GRAY_SCALE_TABLE_LEN]) -> Self {
        Self {
            gray_scale_table: table,
            ..self
        }
    }

    /// Extend this `Config` to configure the initial contrast current. See
    /// `Command::SetContrastCurrent`.
    pub fn contrast_current(self, current: u8) -> Self {
        Self {
            contrast_current_cmd: Command::SetContrastCurrent(current),
            ..self
        }
    }

    /// Extend this `Config` to configure the row period. See `Command::SetRowPeriod`.
    pub fn row_period(self, period: u8) -> Self {
        Self {
            row_period_cmd: Command::SetRowPeriod(period),
            ..self
        }
    }

    /// Extend this `Config` to configure the drive phase lengths. See
    /// `Command::SetPhaseLength`.
    pub fn phase_length(self, phases: u8) -> Self {
        Self {
            phase_length_cmd: Command::SetPhaseLength(phases),
            ..self
        }
    }

    /// Extend this `Config` to configure pre-charge compensation level and its enable register.
    /// See `Command::SetPrechargeCompensation` and `Command::SetPrechargeCompensationEnable`.
    pub fn precharge_compensation(self, level: u8, enable: u8) -> Self {
        Self {
            precharge_compensation_cmd: Command::SetPrechargeCompensation(level),
            precharge_compensation_enable_cmd: Command::SetPrechargeCompensationEnable(enable),
            ..self
        }
    }

    /// Extend this `Config` to configure the COM high voltage. See `Command::SetVcomhLevel`.
    pub fn vcomh_level(self, level: u8) -> Self {
        Self {
            vcomh_level_cmd: Command::SetVcomhLevel(level),
            ..self
        }
    }

    /// Extend this `Config` to configure the segment low voltage. See
    /// `Command::SetSegmentLowVoltage`.
    pub fn segment_low_voltage(self, level: u8) -> Self {
        Self {
            segment_low_voltage_cmd: Command::SetSegmentLowVoltage(level),
            ..self
        }
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`. The order is the one the panel vendors specify.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error>
    where
        DI: interface::DisplayInterface,
    {
        debug!("sending panel configuration {:?}", self);
        self.clock_cmd.send(iface)?;
        self.mux_ratio_cmd.send(iface)?;
        self.display_offset_cmd.send(iface)?;
        self.start_line_cmd.send(iface)?;
        self.master_config_cmd.send(iface)?;
        self.remap_cmd.send(iface)?;
        self.current_range_cmd.send(iface)?;
        BufCommand::SetGrayScaleTable(&self.gray_scale_table).send(iface)?;
        self.contrast_current_cmd.send(iface)?;
        self.row_period_cmd.send(iface)?;
        self.phase_length_cmd.send(iface)?;
        self.precharge_compensation_cmd.send(iface)?;
        self.precharge_compensation_enable_cmd.send(iface)?;
        self.vcomh_level_cmd.send(iface)?;
        self.segment_low_voltage_cmd.send(iface)
    }
}
