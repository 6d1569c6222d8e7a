use nalgebra_glm as glm;

/// Direction for cycling through the fixed viewpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Left,
    Right,
}

/// A fixed camera pose: position plus look angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub position: glm::Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Viewpoint {
    /// Straight-down view over the board center.
    pub fn overhead() -> Self {
        Self {
            position: glm::vec3(0.0, 15.0, 0.0),
            yaw: 0.0,
            pitch: -90.0,
        }
    }

    /// Raised view from behind the near baseline.
    pub fn baseline() -> Self {
        Self {
            position: glm::vec3(0.0, 7.0, 10.0),
            yaw: -90.0,
            pitch: -40.0,
        }
    }

    /// Low three-quarter view from a board corner.
    pub fn corner() -> Self {
        Self {
            position: glm::vec3(7.0, 2.0, 7.0),
            yaw: -135.0,
            pitch: -10.0,
        }
    }

    /// Pick the viewpoint that follows `position` in the cycle ring.
    ///
    /// The current viewpoint is detected by exact equality against the preset
    /// positions, so this only advances the ring when the camera is sitting
    /// on a preset. Any drifted position falls back to the overhead view in
    /// both directions.
    pub fn cycle_from(position: &glm::Vec3, direction: CycleDirection) -> Self {
        let overhead = Self::overhead();
        let baseline = Self::baseline();
        let corner = Self::corner();

        match direction {
            CycleDirection::Left => {
                if *position == overhead.position {
                    corner
                } else if *position == baseline.position {
                    overhead
                } else if *position == corner.position {
                    baseline
                } else {
                    overhead
                }
            }
            CycleDirection::Right => {
                if *position == overhead.position {
                    baseline
                } else if *position == baseline.position {
                    corner
                } else if *position == corner.position {
                    overhead
                } else {
                    overhead
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_walks_the_ring_forward() {
        let a = Viewpoint::cycle_from(&Viewpoint::overhead().position, CycleDirection::Right);
        assert_eq!(a, Viewpoint::baseline());
        let b = Viewpoint::cycle_from(&a.position, CycleDirection::Right);
        assert_eq!(b, Viewpoint::corner());
        let c = Viewpoint::cycle_from(&b.position, CycleDirection::Right);
        assert_eq!(c, Viewpoint::overhead());
    }

    #[test]
    fn left_walks_the_ring_backward() {
        let a = Viewpoint::cycle_from(&Viewpoint::overhead().position, CycleDirection::Left);
        assert_eq!(a, Viewpoint::corner());
        let b = Viewpoint::cycle_from(&a.position, CycleDirection::Left);
        assert_eq!(b, Viewpoint::baseline());
        let c = Viewpoint::cycle_from(&b.position, CycleDirection::Left);
        assert_eq!(c, Viewpoint::overhead());
    }

    #[test]
    fn drifted_position_falls_back_to_overhead() {
        let drifted = glm::vec3(1.5, 3.0, 2.0);
        assert_eq!(
            Viewpoint::cycle_from(&drifted, CycleDirection::Left),
            Viewpoint::overhead()
        );
        assert_eq!(
            Viewpoint::cycle_from(&drifted, CycleDirection::Right),
            Viewpoint::overhead()
        );
    }

    #[test]
    fn near_miss_is_not_a_match() {
        // Detection is exact, so even a tiny offset lands on the fallback.
        let almost = Viewpoint::baseline().position + glm::vec3(1e-6, 0.0, 0.0);
        assert_eq!(
            Viewpoint::cycle_from(&almost, CycleDirection::Right),
            Viewpoint::overhead()
        );
    }
}
