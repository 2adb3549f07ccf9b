//! Native mode command definitions

use std::fmt;

use crate::error::{Error, Result};

/// Command families, as grouped in the In-Sight native mode reference
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CommandFamily {
    ExecutionAndOnline,
    FileAndJob,
    Image,
    SettingsAndCellValues,
}

/// Native mode commands
///
/// Each command is sent as its two-letter mnemonic followed by its
/// arguments, e.g. `LFmyjob.job` or `GVA005`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // Execution & online
    SetOnline,
    GetOnline,
    SetEvent,
    SetEventAndWait,
    ResetSystem,
    SendMessage,

    // File & job
    LoadFile,
    StoreFile,
    ReadFile,
    WriteFile,
    DeleteFile,
    GetFile,
    SetJob,
    StoreJob,
    ReadJob,
    WriteJob,
    DeleteJob,
    GetJob,

    // Image
    ReadBmp,
    ReadImage,
    WriteBmp,
    WriteImage,

    // Settings & cell values
    GetValue,
    SetInteger,
    SetFloat,
    SetRegion,
    SetString,
    GetInfo,
    ReadSettings,
    WriteSettings,
    StoreSettings,
    SetIpLock,
    GetIpLock,
}

const UNRECOGNIZED: &str = "Unrecognized command.";
const NOT_EXECUTED: &str = "The command could not be executed.";
const NO_FULL_ACCESS: &str = "User does not have Full Access to execute the command.";
const EVENT_OUT_OF_RANGE: &str = "The number is either out of range (0 to 8) or not an integer.";
const INT_OUT_OF_RANGE: &str =
    "The value given for Int is either out of range, or is not a valid integer.";
const FILENAME_MISSING: &str = "The filename is missing.";
const JOB_ID_OUT_OF_RANGE: &str = "The job ID number is outside the allowable range (0 to 999).";
const SENSOR_OUT_OF_MEMORY: &str = "The In-Sight sensor is out of memory.";
const SYSTEM_OUT_OF_MEMORY: &str = "The In-Sight vision system is out of memory.";
const CELL_OR_TAG_INVALID: &str = "The cell ID or symbolic tag is invalid.";
const JOB_NOT_WRITTEN: &str = "The job could not be written, or the job data is invalid.";
const JOB_CHECKSUM: &str = "The checksum failed. The checksum does not match the job data.";
const IMAGE_NOT_WRITTEN: &str = "The image could not be written, or the image data is invalid.";
const IMAGE_CHECKSUM: &str = "The checksum failed. The checksum does not match the image data.";
const SENSOR_ONLINE: &str = "The sensor is Online, therefore the command could not be executed.";

impl Command {
    /// Every command, in reference-manual order
    pub const ALL: [Command; 33] = [
        Self::SetOnline,
        Self::GetOnline,
        Self::SetEvent,
        Self::SetEventAndWait,
        Self::ResetSystem,
        Self::SendMessage,
        Self::LoadFile,
        Self::StoreFile,
        Self::ReadFile,
        Self::WriteFile,
        Self::DeleteFile,
        Self::GetFile,
        Self::SetJob,
        Self::StoreJob,
        Self::ReadJob,
        Self::WriteJob,
        Self::DeleteJob,
        Self::GetJob,
        Self::ReadBmp,
        Self::ReadImage,
        Self::WriteBmp,
        Self::WriteImage,
        Self::GetValue,
        Self::SetInteger,
        Self::SetFloat,
        Self::SetRegion,
        Self::SetString,
        Self::GetInfo,
        Self::ReadSettings,
        Self::WriteSettings,
        Self::StoreSettings,
        Self::SetIpLock,
        Self::GetIpLock,
    ];

    /// Two-letter mnemonic sent on the wire
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::SetOnline => "SO",
            Self::GetOnline => "GO",
            Self::SetEvent => "SE",
            Self::SetEventAndWait => "SW",
            Self::ResetSystem => "RT",
            Self::SendMessage => "SM",
            Self::LoadFile => "LF",
            Self::StoreFile => "TF",
            Self::ReadFile => "RF",
            Self::WriteFile => "WF",
            Self::DeleteFile => "DF",
            Self::GetFile => "GF",
            Self::SetJob => "SJ",
            Self::StoreJob => "TJ",
            Self::ReadJob => "RJ",
            Self::WriteJob => "WJ",
            Self::DeleteJob => "DJ",
            Self::GetJob => "GJ",
            Self::ReadBmp => "RB",
            Self::ReadImage => "RI",
            Self::WriteBmp => "WB",
            Self::WriteImage => "WI",
            Self::GetValue => "GV",
            Self::SetInteger => "SI",
            Self::SetFloat => "SF",
            Self::SetRegion => "SR",
            Self::SetString => "SS",
            Self::GetInfo => "GI",
            Self::ReadSettings => "RS",
            Self::WriteSettings => "WS",
            Self::StoreSettings => "TS",
            Self::SetIpLock => "SL",
            Self::GetIpLock => "GL",
        }
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::SetOnline => "SetOnline",
            Self::GetOnline => "GetOnline",
            Self::SetEvent => "SetEvent",
            Self::SetEventAndWait => "SetEventAndWait",
            Self::ResetSystem => "ResetSystem",
            Self::SendMessage => "SendMessage",
            Self::LoadFile => "LoadFile",
            Self::StoreFile => "StoreFile",
            Self::ReadFile => "ReadFile",
            Self::WriteFile => "WriteFile",
            Self::DeleteFile => "DeleteFile",
            Self::GetFile => "GetFile",
            Self::SetJob => "SetJob",
            Self::StoreJob => "StoreJob",
            Self::ReadJob => "ReadJob",
            Self::WriteJob => "WriteJob",
            Self::DeleteJob => "DeleteJob",
            Self::GetJob => "GetJob",
            Self::ReadBmp => "ReadBmp",
            Self::ReadImage => "ReadImage",
            Self::WriteBmp => "WriteBmp",
            Self::WriteImage => "WriteImage",
            Self::GetValue => "GetValue",
            Self::SetInteger => "SetInteger",
            Self::SetFloat => "SetFloat",
            Self::SetRegion => "SetRegion",
            Self::SetString => "SetString",
            Self::GetInfo => "GetInfo",
            Self::ReadSettings => "ReadSettings",
            Self::WriteSettings => "WriteSettings",
            Self::StoreSettings => "StoreSettings",
            Self::SetIpLock => "SetIpLock",
            Self::GetIpLock => "GetIpLock",
        }
    }

    /// Family this command belongs to
    pub fn family(self) -> CommandFamily {
        match self {
            Self::SetOnline
            | Self::GetOnline
            | Self::SetEvent
            | Self::SetEventAndWait
            | Self::ResetSystem
            | Self::SendMessage => CommandFamily::ExecutionAndOnline,
            Self::LoadFile
            | Self::StoreFile
            | Self::ReadFile
            | Self::WriteFile
            | Self::DeleteFile
            | Self::GetFile
            | Self::SetJob
            | Self::StoreJob
            | Self::ReadJob
            | Self::WriteJob
            | Self::DeleteJob
            | Self::GetJob => CommandFamily::FileAndJob,
            Self::ReadBmp | Self::ReadImage | Self::WriteBmp | Self::WriteImage => {
                CommandFamily::Image
            }
            _ => CommandFamily::SettingsAndCellValues,
        }
    }

    /// Check if the camera answers with a hex payload after the status line
    pub fn returns_payload(self) -> bool {
        matches!(
            self,
            Self::ReadFile | Self::ReadJob | Self::ReadBmp | Self::ReadImage | Self::ReadSettings
        )
    }

    /// Check if this command uploads a hex payload
    pub fn sends_payload(self) -> bool {
        matches!(
            self,
            Self::WriteFile
                | Self::WriteJob
                | Self::WriteBmp
                | Self::WriteImage
                | Self::WriteSettings
        )
    }

    /// Description the camera documents for a failure code of this command
    ///
    /// Returns `None` for codes the command never reports.
    pub fn status_message(self, code: i32) -> Option<&'static str> {
        let message = match (self, code) {
            (Self::GetOnline | Self::GetIpLock, _) => return None,
            (Self::ResetSystem, -6) => NO_FULL_ACCESS,
            (Self::ResetSystem, _) => return None,

            (_, 0) => UNRECOGNIZED,

            (Self::SetOnline, -1) => INT_OUT_OF_RANGE,
            (Self::SetOnline, -2) => NOT_EXECUTED,
            (Self::SetOnline, -5) => {
                "The communications flag was successful but the sensor did not go Online \
                 because the sensor is set Offline manually through the In-Sight Explorer \
                 user interface or by a Discrete I/O signal."
            }

            (Self::SetEvent | Self::SendMessage, -1) => EVENT_OUT_OF_RANGE,
            (Self::SetEvent | Self::SendMessage, -2) => NOT_EXECUTED,
            (Self::SetEventAndWait, -1) => EVENT_OUT_OF_RANGE,
            (Self::SetEventAndWait, -2) => {
                "The command could not be executed, or the sensor is Offline."
            }

            (Self::LoadFile | Self::StoreFile | Self::DeleteFile, -1) => FILENAME_MISSING,
            (Self::LoadFile, -2) => {
                "The job failed to load, the vision system is Online, or the file was not found."
            }
            (Self::LoadFile, -4) => "The vision system is out of memory.",
            (Self::StoreFile, -2) => {
                "The job failed to save, the vision system is Online or the file was not \
                 found, therefore the command could not be executed."
            }
            (Self::ReadFile, -1) => "The job filename is missing.",
            (Self::ReadFile, -2) => {
                "There is no job saved with the given name or the job data is invalid, \
                 therefore the command could not be executed."
            }
            (Self::WriteFile | Self::WriteJob, -2) => JOB_NOT_WRITTEN,
            (Self::WriteFile | Self::WriteJob, -3) => JOB_CHECKSUM,
            (Self::WriteFile | Self::WriteJob, -4) => SYSTEM_OUT_OF_MEMORY,
            (Self::DeleteFile, -2) => {
                "The file could not be deleted, the vision system is Online, a file does not \
                 exist with the given name, or the job data is invalid, therefore the command \
                 could not be executed."
            }
            (Self::GetFile, -2) => {
                "The active job has not been saved, therefore the command could not be executed."
            }

            (Self::SetJob, -1) => "The ID is less than 0, or is not an integer.",
            (Self::SetJob, -2) => {
                "The job failed to load, the sensor is Online or the file was not found, \
                 therefore the command could not be executed."
            }
            (Self::SetJob | Self::ReadJob, -4) => SENSOR_OUT_OF_MEMORY,
            (Self::StoreJob, -1) => "The job ID number is invalid or it is not an integer.",
            (Self::StoreJob, -2) => SENSOR_ONLINE,
            (Self::ReadJob | Self::WriteJob | Self::DeleteJob, -1) => JOB_ID_OUT_OF_RANGE,
            (Self::ReadJob, -2) => {
                "The job could not be read, or the job slot is empty, therefore the command \
                 could not be executed."
            }
            (Self::DeleteJob, -2) => {
                "The job could not be deleted, the sensor is Online, or the job slot is empty, \
                 therefore the command could not be executed."
            }
            (Self::GetJob, -2) => {
                "The active job has not been saved or does not have a numerical prefix, \
                 therefore the command could not be executed."
            }

            (Self::ReadBmp | Self::ReadImage, -4) => SENSOR_OUT_OF_MEMORY,
            (Self::WriteBmp | Self::WriteImage, -2) => IMAGE_NOT_WRITTEN,
            (Self::WriteBmp | Self::WriteImage, -3) => IMAGE_CHECKSUM,
            (Self::WriteBmp | Self::WriteImage, -4) => SENSOR_OUT_OF_MEMORY,

            (Self::GetValue | Self::SetInteger | Self::SetRegion, -1) => CELL_OR_TAG_INVALID,
            (Self::GetValue, -2) => NOT_EXECUTED,
            (Self::SetInteger, -2) => {
                "The command could not be executed, or the specified integer value is outside \
                 of the control's valid range. For example, the specified cell may not contain \
                 a control of the valid type."
            }
            (Self::SetFloat, -1) => {
                "The cell ID or symbolic tag is invalid, or the specified value does not \
                 contain a floating-point number."
            }
            (Self::SetFloat, -2) => {
                "The command could not be executed. For example, the specified cell may not \
                 contain an edit box control, or the edit box control was not created by the \
                 EditFloat function."
            }
            (Self::SetRegion, -2) => {
                "The command could not be executed because the specified cell or symbolic tag \
                 does not contain an edit region control, or the edit region control was not \
                 created by the EditRegion function."
            }
            (Self::SetString, -1) => "The cell ID is invalid.",
            (Self::SetString, -2) => {
                "The input string is longer than the specified maximum string length in the \
                 EditString function or the cell does not contain an EditString function."
            }
            (Self::GetInfo, -2) => NOT_EXECUTED,
            (Self::ReadSettings, -1) => "The settings could not be read.",
            (Self::ReadSettings, -4) => SENSOR_OUT_OF_MEMORY,
            (Self::WriteSettings, -2) => "The settings could not be saved.",
            (Self::WriteSettings, -3) => {
                "The checksum failed. The checksum does not match the settings data."
            }
            (Self::WriteSettings, -4) => SYSTEM_OUT_OF_MEMORY,
            (Self::StoreSettings, -2) => SENSOR_ONLINE,
            (Self::SetIpLock, -1) => {
                "The value given for Int is either out of range or is not a valid integer."
            }
            (Self::SetIpLock, -2) => NOT_EXECUTED,

            (
                Self::SetOnline
                | Self::SetEvent
                | Self::SetEventAndWait
                | Self::SendMessage
                | Self::LoadFile
                | Self::StoreFile
                | Self::ReadFile
                | Self::WriteFile
                | Self::DeleteFile
                | Self::SetJob
                | Self::StoreJob
                | Self::ReadJob
                | Self::WriteJob
                | Self::DeleteJob
                | Self::ReadBmp
                | Self::ReadImage
                | Self::WriteBmp
                | Self::WriteImage
                | Self::SetInteger
                | Self::SetFloat
                | Self::ReadSettings,
                -6,
            ) => NO_FULL_ACCESS,

            _ => return None,
        };

        Some(message)
    }
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.mnemonic().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::UnknownCommand(value.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.mnemonic())
    }
}
