//! Linkage parameters and the solver values.
use crate::Error;

/// Planar five-bar linkage.
///
/// # Parameters
///
/// + Ground anchor of the first actuator `g1`
/// + Ground anchor of the second actuator `g2`
/// + First actuator link `l1`, on `g1`
/// + Second actuator link `l2`, on `g2`
/// + First passive link `l3`, from the end of `l1` to the effector
/// + Second passive link `l4`, from the end of `l2` to the effector
/// + Unused link `l5`, recorded but never read by the solvers
/// + Inverse the effector to the mirrored assembly `inv`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FiveBar {
    /// Ground anchor of the first actuator
    pub g1: [f64; 2],
    /// Ground anchor of the second actuator
    pub g2: [f64; 2],
    /// Length of the first actuator link
    pub l1: f64,
    /// Length of the second actuator link
    pub l2: f64,
    /// Length of the first passive link
    pub l3: f64,
    /// Length of the second passive link
    pub l4: f64,
    /// Length of the unused link
    #[cfg_attr(feature = "serde", serde(default))]
    pub l5: Option<f64>,
    /// Take the mirrored effector position in forward kinematics
    #[cfg_attr(feature = "serde", serde(default))]
    pub inv: bool,
}

impl Default for FiveBar {
    fn default() -> Self {
        Self::example()
    }
}

impl FiveBar {
    /// Create a new linkage from the link lengths `[l1, l2, l3, l4]` and the
    /// ground anchors.
    ///
    /// ```
    /// use five_bar::FiveBar;
    ///
    /// assert!(FiveBar::new([2.; 4], [0., 0.], [4., 0.]).is_ok());
    /// assert!(FiveBar::new([2.; 4], [1., 1.], [1., 1.]).is_err());
    /// assert!(FiveBar::new([2., 0., 2., 2.], [0., 0.], [4., 0.]).is_err());
    /// ```
    pub fn new(links: [f64; 4], g1: [f64; 2], g2: [f64; 2]) -> Result<Self, Error> {
        let [l1, l2, l3, l4] = links;
        let fb = Self { g1, g2, l1, l2, l3, l4, l5: None, inv: false };
        fb.check()?;
        Ok(fb)
    }

    /// The historical mechanism.
    ///
    /// All links are 2 units long and the anchors are 4 units apart on the
    /// X axis.
    pub const fn example() -> Self {
        Self {
            g1: [0., 0.],
            g2: [4., 0.],
            l1: 2.,
            l2: 2.,
            l3: 2.,
            l4: 2.,
            l5: Some(1.5),
            inv: false,
        }
    }

    /// Build with the unused link length.
    pub fn with_l5(self, l5: f64) -> Self {
        Self { l5: Some(l5), ..self }
    }

    /// Build with the inversion flag.
    pub fn with_inv(self, inv: bool) -> Self {
        Self { inv, ..self }
    }

    /// Check the invariants of the linkage.
    ///
    /// Deserialized or hand-built values are not checked automatically.
    pub fn check(&self) -> Result<(), Error> {
        let links = [self.l1, self.l2, self.l3, self.l4];
        if !links.iter().all(|l| l.is_finite() && *l > 0.) {
            return Err(Error::InvalidLinkage("link lengths must be positive"));
        }
        if !self.g1.iter().chain(&self.g2).all(|x| x.is_finite()) {
            return Err(Error::InvalidLinkage("ground anchors must be finite"));
        }
        if self.g1 == self.g2 {
            return Err(Error::InvalidLinkage("ground anchors must not coincide"));
        }
        Ok(())
    }

    /// Length of the ground link, the distance between the anchors.
    pub fn ground(&self) -> f64 {
        let [x1, y1] = self.g1;
        let [x2, y2] = self.g2;
        (x2 - x1).hypot(y2 - y1)
    }
}

/// Signed input angles of the actuators in radians.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Angles {
    /// Angle of the first actuator, from the +X axis at `g1`
    pub theta1: f64,
    /// Angle of the second actuator, from the -X axis at `g2`
    pub theta2: f64,
}

impl Angles {
    /// Create a new value.
    pub const fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    /// Create from degrees.
    pub fn from_degrees(theta1: f64, theta2: f64) -> Self {
        Self::new(theta1.to_radians(), theta2.to_radians())
    }

    /// Angles in degrees.
    pub fn to_degrees(self) -> [f64; 2] {
        [self.theta1.to_degrees(), self.theta2.to_degrees()]
    }

    /// Human-readable label in degrees, rounded to two decimals.
    ///
    /// ```
    /// use five_bar::Angles;
    ///
    /// let angles = Angles::from_degrees(30., -45.5);
    /// assert_eq!(angles.label(), "theta1=30.00°, theta2=-45.50°");
    /// ```
    pub fn label(&self) -> String {
        let [t1, t2] = self.to_degrees();
        format!("theta1={t1:.2}°, theta2={t2:.2}°")
    }
}

/// Joint positions of an assembled linkage.
///
/// The polyline order is `g1`, `a`, `p`, `b`, `g2`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Joints {
    /// First ground anchor
    pub g1: [f64; 2],
    /// Free joint of the first actuator
    pub a: [f64; 2],
    /// Effector point
    pub p: [f64; 2],
    /// Free joint of the second actuator
    pub b: [f64; 2],
    /// Second ground anchor
    pub g2: [f64; 2],
}

impl From<Joints> for [[f64; 2]; 5] {
    fn from(js: Joints) -> Self {
        js.to_polyline()
    }
}

impl Joints {
    /// The connected polyline `g1-a-p-b-g2`.
    pub const fn to_polyline(&self) -> [[f64; 2]; 5] {
        [self.g1, self.a, self.p, self.b, self.g2]
    }
}
