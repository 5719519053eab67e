//! The twelve global settings, their kinds, defaults and save-time canonicalization.

use std::fmt;

use kf_math::round_to_nearest_value;

use crate::error::ConfigError;
use crate::node::ConfigNode;
use crate::parse::Parsed;

/// Log file name used when `logFile` is missing or blank.
pub const DEFAULT_LOG_FILE: &str = "KF.log";

/// Every known setting, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    IsDustEnabled,
    IsDustCameraEnabled,
    IsMarkerEnabled,
    IsRepLightEnabled,
    DustAmount,
    SuspensionIncrement,
    IsDebugEnabled,
    DebugIsWaterColliderVisible,
    WriteToLogFile,
    LogFile,
    CameraRes,
    CameraFramerate,
}

/// Value type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Int,
    Float,
    String,
}

/// A setting value tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl SettingKey {
    pub const ALL: [SettingKey; 12] = [
        SettingKey::IsDustEnabled,
        SettingKey::IsDustCameraEnabled,
        SettingKey::IsMarkerEnabled,
        SettingKey::IsRepLightEnabled,
        SettingKey::DustAmount,
        SettingKey::SuspensionIncrement,
        SettingKey::IsDebugEnabled,
        SettingKey::DebugIsWaterColliderVisible,
        SettingKey::WriteToLogFile,
        SettingKey::LogFile,
        SettingKey::CameraRes,
        SettingKey::CameraFramerate,
    ];

    /// Key as written in the settings document.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::IsDustEnabled => "isDustEnabled",
            SettingKey::IsDustCameraEnabled => "isDustCameraEnabled",
            SettingKey::IsMarkerEnabled => "isMarkerEnabled",
            SettingKey::IsRepLightEnabled => "isRepLightEnabled",
            SettingKey::DustAmount => "dustAmount",
            SettingKey::SuspensionIncrement => "suspensionIncrement",
            SettingKey::IsDebugEnabled => "isDebugEnabled",
            SettingKey::DebugIsWaterColliderVisible => "debugIsWaterColliderVisible",
            SettingKey::WriteToLogFile => "writeToLogFile",
            SettingKey::LogFile => "logFile",
            SettingKey::CameraRes => "cameraRes",
            SettingKey::CameraFramerate => "cameraFramerate",
        }
    }

    pub fn kind(self) -> SettingKind {
        self.default_value().kind()
    }

    /// Compiled-in default.
    pub fn default_value(self) -> SettingValue {
        match self {
            SettingKey::IsDustEnabled
            | SettingKey::IsDustCameraEnabled
            | SettingKey::IsMarkerEnabled
            | SettingKey::IsRepLightEnabled => SettingValue::Bool(true),
            SettingKey::DustAmount => SettingValue::Float(1.0),
            SettingKey::SuspensionIncrement => SettingValue::Float(5.0),
            SettingKey::IsDebugEnabled
            | SettingKey::DebugIsWaterColliderVisible
            | SettingKey::WriteToLogFile => SettingValue::Bool(false),
            SettingKey::LogFile => SettingValue::String(DEFAULT_LOG_FILE.to_string()),
            SettingKey::CameraRes => SettingValue::Int(6),
            SettingKey::CameraFramerate => SettingValue::Int(10),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SettingKind::Bool => "bool",
            SettingKind::Int => "int",
            SettingKind::Float => "float",
            SettingKind::String => "string",
        };
        f.write_str(s)
    }
}

impl SettingValue {
    pub fn kind(&self) -> SettingKind {
        match self {
            SettingValue::Bool(_) => SettingKind::Bool,
            SettingValue::Int(_) => SettingKind::Int,
            SettingValue::Float(_) => SettingKind::Float,
            SettingValue::String(_) => SettingKind::String,
        }
    }
}

/// Document text for a value. Booleans use the host game's `True`/`False`.
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(true) => f.write_str("True"),
            SettingValue::Bool(false) => f.write_str("False"),
            SettingValue::Int(v) => write!(f, "{v}"),
            SettingValue::Float(v) => write!(f, "{v}"),
            SettingValue::String(v) => f.write_str(v),
        }
    }
}

/// Global add-on settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Dust particles are emitted by wheels and repulsors.
    pub is_dust_enabled: bool,
    /// A camera samples the ground color to tint the dust.
    pub is_dust_camera_enabled: bool,
    /// Orientation markers are shown on wheels in the editor.
    pub is_marker_enabled: bool,
    /// Repulsor lighting.
    pub is_rep_light_enabled: bool,
    /// Dust emission multiplier, persisted in quarter steps within [0, 3].
    pub dust_amount: f32,
    /// Ride-height change per action-group press, persisted in steps of 5 within [5, 20].
    pub suspension_increment: f32,
    /// Shows the debug options.
    pub is_debug_enabled: bool,
    /// Renders the water collider; only meaningful while debug is enabled.
    pub debug_is_water_collider_visible: bool,
    /// Mirror log output to [`Settings::log_file`].
    pub write_to_log_file: bool,
    /// Log file name.
    pub log_file: String,
    /// Dust camera resolution.
    pub camera_res: i32,
    /// Dust camera frame rate.
    pub camera_framerate: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_dust_enabled: true,
            is_dust_camera_enabled: true,
            is_marker_enabled: true,
            is_rep_light_enabled: true,
            dust_amount: 1.0,
            suspension_increment: 5.0,
            is_debug_enabled: false,
            debug_is_water_collider_visible: false,
            write_to_log_file: false,
            log_file: DEFAULT_LOG_FILE.to_string(),
            camera_res: 6,
            camera_framerate: 10,
        }
    }
}

impl Settings {
    /// Current value of `key`.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        match key {
            SettingKey::IsDustEnabled => SettingValue::Bool(self.is_dust_enabled),
            SettingKey::IsDustCameraEnabled => SettingValue::Bool(self.is_dust_camera_enabled),
            SettingKey::IsMarkerEnabled => SettingValue::Bool(self.is_marker_enabled),
            SettingKey::IsRepLightEnabled => SettingValue::Bool(self.is_rep_light_enabled),
            SettingKey::DustAmount => SettingValue::Float(self.dust_amount),
            SettingKey::SuspensionIncrement => SettingValue::Float(self.suspension_increment),
            SettingKey::IsDebugEnabled => SettingValue::Bool(self.is_debug_enabled),
            SettingKey::DebugIsWaterColliderVisible => {
                SettingValue::Bool(self.debug_is_water_collider_visible)
            }
            SettingKey::WriteToLogFile => SettingValue::Bool(self.write_to_log_file),
            SettingKey::LogFile => SettingValue::String(self.log_file.clone()),
            SettingKey::CameraRes => SettingValue::Int(self.camera_res),
            SettingKey::CameraFramerate => SettingValue::Int(self.camera_framerate),
        }
    }

    /// Assign `value` to `key`. The value's kind must match the key's kind.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), ConfigError> {
        match (key, value) {
            (SettingKey::IsDustEnabled, SettingValue::Bool(v)) => self.is_dust_enabled = v,
            (SettingKey::IsDustCameraEnabled, SettingValue::Bool(v)) => {
                self.is_dust_camera_enabled = v
            }
            (SettingKey::IsMarkerEnabled, SettingValue::Bool(v)) => self.is_marker_enabled = v,
            (SettingKey::IsRepLightEnabled, SettingValue::Bool(v)) => {
                self.is_rep_light_enabled = v
            }
            (SettingKey::DustAmount, SettingValue::Float(v)) => self.dust_amount = v,
            (SettingKey::SuspensionIncrement, SettingValue::Float(v)) => {
                self.suspension_increment = v
            }
            (SettingKey::IsDebugEnabled, SettingValue::Bool(v)) => self.is_debug_enabled = v,
            (SettingKey::DebugIsWaterColliderVisible, SettingValue::Bool(v)) => {
                self.debug_is_water_collider_visible = v
            }
            (SettingKey::WriteToLogFile, SettingValue::Bool(v)) => self.write_to_log_file = v,
            (SettingKey::LogFile, SettingValue::String(v)) => self.log_file = v,
            (SettingKey::CameraRes, SettingValue::Int(v)) => self.camera_res = v,
            (SettingKey::CameraFramerate, SettingValue::Int(v)) => self.camera_framerate = v,
            (key, value) => {
                return Err(ConfigError::KindMismatch {
                    key,
                    expected: key.kind(),
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// Copy with the save-time rules applied:
    /// - `dustAmount` rounded to 0.25, then clamped to [0, 3]
    /// - `suspensionIncrement` rounded to 5, then clamped to [5, 20]
    /// - `debugIsWaterColliderVisible` forced off unless debug is enabled
    /// - blank `logFile` replaced by the default name
    pub fn canonicalized(&self) -> Settings {
        let mut out = self.clone();
        out.dust_amount = round_to_nearest_value(self.dust_amount, 0.25).clamp(0.0, 3.0);
        out.suspension_increment =
            round_to_nearest_value(self.suspension_increment, 5.0).clamp(5.0, 20.0);
        if !out.is_debug_enabled {
            out.debug_is_water_collider_visible = false;
        }
        if out.log_file.is_empty() {
            out.log_file = DEFAULT_LOG_FILE.to_string();
        }
        out
    }

    /// Resolve every key from `node`, keeping the default for values that are
    /// missing or fail to parse. Returns the keys that fell back.
    pub fn from_node(node: &ConfigNode) -> (Settings, Vec<SettingKey>) {
        let d = Settings::default();
        let mut r = Resolver {
            node,
            defaulted: Vec::new(),
        };
        let settings = Settings {
            is_dust_enabled: r.bool(SettingKey::IsDustEnabled, d.is_dust_enabled),
            is_dust_camera_enabled: r.bool(SettingKey::IsDustCameraEnabled, d.is_dust_camera_enabled),
            is_marker_enabled: r.bool(SettingKey::IsMarkerEnabled, d.is_marker_enabled),
            is_rep_light_enabled: r.bool(SettingKey::IsRepLightEnabled, d.is_rep_light_enabled),
            dust_amount: r.float(SettingKey::DustAmount, d.dust_amount),
            suspension_increment: r.float(SettingKey::SuspensionIncrement, d.suspension_increment),
            is_debug_enabled: r.bool(SettingKey::IsDebugEnabled, d.is_debug_enabled),
            debug_is_water_collider_visible: r.bool(
                SettingKey::DebugIsWaterColliderVisible,
                d.debug_is_water_collider_visible,
            ),
            write_to_log_file: r.bool(SettingKey::WriteToLogFile, d.write_to_log_file),
            log_file: r.string(SettingKey::LogFile, &d.log_file),
            camera_res: r.int(SettingKey::CameraRes, d.camera_res),
            camera_framerate: r.int(SettingKey::CameraFramerate, d.camera_framerate),
        };
        (settings, r.defaulted)
    }

    /// Write every key into a fresh node named `name`, in document order.
    pub fn to_node(&self, name: &str) -> ConfigNode {
        let mut node = ConfigNode::new(name);
        for key in SettingKey::ALL {
            node.set_value(key.name(), self.get(key).to_string());
        }
        node
    }

    /// Log the effective values, one per line.
    pub fn log_values(&self) {
        log::info!("Configuration settings are:");
        for key in SettingKey::ALL {
            if key == SettingKey::DebugIsWaterColliderVisible && !self.is_debug_enabled {
                continue;
            }
            log::info!("  {} = {}", key.name(), self.get(key));
        }
    }
}

/// Reads typed values from a settings node, recording keys that fell back.
struct Resolver<'a> {
    node: &'a ConfigNode,
    defaulted: Vec<SettingKey>,
}

impl Resolver<'_> {
    fn bool(&mut self, key: SettingKey, default: bool) -> bool {
        let p = self.node.get_bool(key.name(), default);
        self.track(key, p)
    }

    fn int(&mut self, key: SettingKey, default: i32) -> i32 {
        let p = self.node.get_int(key.name(), default);
        self.track(key, p)
    }

    fn float(&mut self, key: SettingKey, default: f32) -> f32 {
        let p = self.node.get_float(key.name(), default);
        self.track(key, p)
    }

    fn string(&mut self, key: SettingKey, default: &str) -> String {
        let p = self.node.get_string(key.name(), default);
        self.track(key, p)
    }

    fn track<T>(&mut self, key: SettingKey, parsed: Parsed<T>) -> T {
        if parsed.defaulted {
            let name = key.name();
            match self.node.value(name) {
                Some(raw) => log::warn!(
                    "Could not parse {name} = '{raw}' as {}, using default {}",
                    key.kind(),
                    key.default_value()
                ),
                None => log::warn!("{name} is missing, using default {}", key.default_value()),
            }
            self.defaulted.push(key);
        }
        parsed.value
    }
}
