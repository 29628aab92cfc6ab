use std::f32::consts::{FRAC_PI_2, TAU};

use chrono::{Local, Timelike, Utc};

/// Hour hand length as a fraction of the clock radius
pub const HOUR_HAND_RATIO: f32 = 0.50;
/// Minute hand length as a fraction of the clock radius
pub const MINUTE_HAND_RATIO: f32 = 0.75;
/// Second hand length as a fraction of the clock radius
pub const SECOND_HAND_RATIO: f32 = 0.90;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Wall-clock reading used to pose the clock hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Time of day for a UNIX timestamp shifted by `utc_offset_minutes`.
    pub fn from_unix_secs(secs: i64, utc_offset_minutes: i32) -> Self {
        let local = secs + i64::from(utc_offset_minutes) * 60;
        let of_day = local.rem_euclid(SECONDS_PER_DAY) as u32;
        Self {
            hour: of_day / 3600,
            minute: of_day / 60 % 60,
            second: of_day % 60,
        }
    }

    /// Hour, minute and second of any chrono time reading.
    pub fn of<T: Timelike>(reading: &T) -> Self {
        Self::new(reading.hour(), reading.minute(), reading.second())
    }

    /// Current wall-clock time in the local time zone, or at a fixed
    /// `utc_offset_minutes` east of UTC when one is given.
    pub fn now(utc_offset_minutes: Option<i32>) -> Self {
        match utc_offset_minutes {
            Some(offset) => Self::from_unix_secs(Utc::now().timestamp(), offset),
            None => Self::of(&Local::now()),
        }
    }
}

/// Direction of a hand at `unit` out of `range`, with 12 o'clock pointing up.
///
/// Pointer space grows downward, so `-PI/2` is up on screen.
fn hand_angle(unit: u32, range: u32) -> f32 {
    unit as f32 / range as f32 * TAU - FRAC_PI_2
}

/// Hand directions for one refresh, already scaled by each hand's length ratio.
///
/// Computed once per frame and shared by every clock; only the radius and the
/// center differ between clocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAngle {
    pub hour: (f32, f32),
    pub minute: (f32, f32),
    pub second: (f32, f32),
}

impl TimeAngle {
    pub fn new(time: ClockTime) -> Self {
        let scaled = |angle: f32, ratio: f32| (ratio * angle.cos(), ratio * angle.sin());
        Self {
            hour: scaled(hand_angle(time.hour % 12, 12), HOUR_HAND_RATIO),
            minute: scaled(hand_angle(time.minute, 60), MINUTE_HAND_RATIO),
            second: scaled(hand_angle(time.second, 60), SECOND_HAND_RATIO),
        }
    }
}
