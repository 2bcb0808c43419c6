//! Actuator angles to hobby servo commands.
//!
//! Each servo is mounted with an angle offset, and the legs on the two sides
//! of a body are mirrored. The servo accepts `[min_deg, max_deg]` mapped
//! linearly onto the pulse width `[min_pulse, max_pulse]` in microseconds.
use crate::{Angles, Error};

/// A position servo.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Servo {
    /// Actuator angle of the servo center in degrees
    pub offset: f64,
    /// Lower bound of the servo angle in degrees
    pub min_deg: f64,
    /// Upper bound of the servo angle in degrees
    pub max_deg: f64,
    /// Pulse width of the lower bound in microseconds
    pub min_pulse: f64,
    /// Pulse width of the upper bound in microseconds
    pub max_pulse: f64,
}

impl Default for Servo {
    fn default() -> Self {
        Self::new(0.)
    }
}

impl Servo {
    /// A ±90° servo driven by 500–2500 µs pulses.
    pub const fn new(offset: f64) -> Self {
        Self {
            offset,
            min_deg: -90.,
            max_deg: 90.,
            min_pulse: 500.,
            max_pulse: 2500.,
        }
    }

    /// Pulse width in microseconds of a servo angle in degrees.
    ///
    /// ```
    /// use five_bar::servo::Servo;
    ///
    /// let servo = Servo::new(0.);
    /// assert_eq!(servo.pulse_width(0.).unwrap(), 1500);
    /// assert!(servo.pulse_width(90.5).is_err());
    /// ```
    pub fn pulse_width(&self, deg: f64) -> Result<u32, Error> {
        if !(self.min_deg..=self.max_deg).contains(&deg) {
            return Err(Error::ServoRange { deg });
        }
        let t = (deg - self.min_deg) / (self.max_deg - self.min_deg);
        Ok((self.min_pulse + t * (self.max_pulse - self.min_pulse)).round() as u32)
    }
}

/// Mounting side of a leg.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum Side {
    /// Left side
    #[default]
    Left,
    /// Right side, mirrored from the left
    Right,
}

impl std::str::FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(Error::InvalidSide(s.to_string())),
        }
    }
}

/// A five-bar leg driven by two servos.
///
/// The front servo drives `l1` on `g1`, the rear servo drives `l2` on `g2`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Leg {
    /// Mounting side
    pub side: Side,
    /// Servo of the first actuator
    pub front: Servo,
    /// Servo of the second actuator
    pub rear: Servo,
}

impl Leg {
    /// The biped legs, front horn at 145° and rear horn at 138°.
    pub const fn example(side: Side) -> Self {
        Self { side, front: Servo::new(145.), rear: Servo::new(138.) }
    }

    /// Servo angles `[front, rear]` in degrees of the actuator angles.
    pub fn servo_angles(&self, angles: Angles) -> [f64; 2] {
        let [t1, t2] = angles.to_degrees();
        let [o1, o2] = [self.front.offset, self.rear.offset];
        match self.side {
            Side::Left => [t1 - o1, o2 - t2],
            Side::Right => [o1 - t1, t2 - o2],
        }
    }

    /// Pulse widths `[front, rear]` in microseconds of the actuator angles.
    ///
    /// Returns [`Error::ServoRange`] if any servo is out of its range.
    pub fn pulse_widths(&self, angles: Angles) -> Result<[u32; 2], Error> {
        let [d1, d2] = self.servo_angles(angles);
        log::debug!("servo: side={:?}, angles=[{d1}, {d2}]", self.side);
        Ok([self.front.pulse_width(d1)?, self.rear.pulse_width(d2)?])
    }
}
