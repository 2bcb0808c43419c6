use crate::{geo::*, Angles, Error, FiveBar, Joints};

impl FiveBar {
    /// Forward kinematics, the joint positions of the actuator angles.
    ///
    /// Use the branch selected by [`FiveBar::inv`].
    ///
    /// ```
    /// use five_bar::{Angles, FiveBar};
    ///
    /// let fb = FiveBar::example();
    /// let js = fb.fk(Angles::from_degrees(60., 60.)).unwrap();
    /// assert!((js.p[0] - 2.).abs() < 1e-12);
    /// assert!((js.p[1] - 2. * 3f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn fk(&self, angles: Angles) -> Result<Joints, Error> {
        self.fk_s(angles, self.inv)
    }

    /// Forward kinematics with the inversion flag.
    ///
    /// The effector lies on the left side of the directed segment `a -> b`
    /// if `inv` is false, otherwise on the right side.
    pub fn fk_s(&self, angles: Angles, inv: bool) -> Result<Joints, Error> {
        self.check()?;
        let Angles { theta1, theta2 } = angles;
        let g1 = to_point(self.g1);
        let g2 = to_point(self.g2);
        let a = polar(&g1, self.l1, theta1);
        // The second actuator is mirrored about the Y axis
        let b = g2 + self.l2 * na::Vector2::new(-theta2.cos(), theta2.sin());
        let d = distance(&a, &b);
        log::debug!("fk: a={a}, b={b}, d={d}");
        if !reachable(self.l3, self.l4, d) {
            return Err(Error::InfeasibleAssembly { dist: d });
        }
        let dir = uvec(&a, &b)?;
        let perp = if inv { -perpendicular(&dir) } else { perpendicular(&dir) };
        let angle = included_angle(self.l3, self.l4, d);
        let p = a + self.l3 * (angle.cos() * dir + angle.sin() * perp);
        Ok(Joints {
            g1: self.g1,
            a: to_coord(a),
            p: to_coord(p),
            b: to_coord(b),
            g2: self.g2,
        })
    }
}
