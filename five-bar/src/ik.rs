use crate::{geo::*, Angles, Error, FiveBar, Orient};

impl FiveBar {
    /// Unsigned base angles `[theta1, theta2]` for the target point.
    ///
    /// The angles come only from the triangle sides of each actuator chain,
    /// the bearing of the target from the anchor is not included. This is
    /// exact for targets on the ground line.
    pub fn ik_base(&self, target: [f64; 2]) -> Result<[f64; 2], Error> {
        self.check()?;
        let p = to_point(target);
        let d1 = distance(&p, &to_point(self.g1));
        let d2 = distance(&p, &to_point(self.g2));
        log::debug!("ik: target={target:?}, d1={d1}, d2={d2}");
        if !reachable(self.l1, self.l3, d1) {
            return Err(Error::InfeasibleTarget { chain: 1, dist: d1 });
        }
        if !reachable(self.l2, self.l4, d2) {
            return Err(Error::InfeasibleTarget { chain: 2, dist: d2 });
        }
        // Reachable with equal links, but no triangle on the anchor
        if d1 == 0. || d2 == 0. {
            return Err(Error::DegenerateSegment);
        }
        let t1 = included_angle(self.l1, self.l3, d1);
        let t2 = included_angle(self.l2, self.l4, d2);
        log::debug!("ik: base angles=[{t1}, {t2}]");
        Ok([t1, t2])
    }

    /// Inverse kinematics, the actuator angles that place the effector on
    /// the target point.
    ///
    /// ```
    /// use five_bar::{FiveBar, Orient};
    ///
    /// let fb = FiveBar::example();
    /// let angles = fb.ik([2., 1.5], Orient::InOut).unwrap();
    /// assert!(angles.theta1 > 0. && angles.theta2 < 0.);
    /// assert!(fb.ik([100., 100.], Orient::InIn).is_err());
    /// ```
    pub fn ik(&self, target: [f64; 2], orient: Orient) -> Result<Angles, Error> {
        let [t1, t2] = self.ik_base(target)?;
        let [s1, s2] = orient.signs();
        Ok(Angles::new(s1 * t1, s2 * t2))
    }

    /// Inverse kinematics with the bearing of the target added to the base
    /// angles.
    ///
    /// The first angle is measured from the +X axis at `g1`, the second from
    /// the -X axis at `g2`, the same frames as [`FiveBar::fk`]. Unlike
    /// [`FiveBar::ik`], both free joints end at the passive link lengths from
    /// any reachable target, so one of the two branches of the forward
    /// kinematics lands on the target.
    ///
    /// ```
    /// use five_bar::{FiveBar, Orient};
    ///
    /// let fb = FiveBar::example();
    /// let angles = fb.ik_bearing([2., 1.5], Orient::InIn).unwrap();
    /// let js = fb.fk_s(angles, true).unwrap();
    /// assert!((js.p[0] - 2.).abs() < 1e-9 && (js.p[1] - 1.5).abs() < 1e-9);
    /// ```
    pub fn ik_bearing(&self, target: [f64; 2], orient: Orient) -> Result<Angles, Error> {
        let [b1, b2] = self.ik_base(target)?;
        let [x, y] = target;
        let a1 = (y - self.g1[1]).atan2(x - self.g1[0]);
        let a2 = (y - self.g2[1]).atan2(self.g2[0] - x);
        log::debug!("ik: bearings=[{a1}, {a2}]");
        let [s1, s2] = orient.signs();
        Ok(Angles::new(a1 + s1 * b1, a2 + s2 * b2))
    }
}
