//! Mecanum drive calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use util::maths::sum_abs;

use super::{DriveSticks, WheelSpeeds};

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DriveSticks {
    /// Perform the mecanum drive calculations.
    ///
    /// Forward comes from `left_y`, strafe from `-left_x` and rotation from `-right_x`. When the
    /// absolute sum of the three components exceeds one all wheels are divided by that sum, so no
    /// demand exceeds one and the ratio between wheels is kept.
    pub fn calc_mecanum(&self) -> WheelSpeeds {
        let fwd = self.left_y;
        let strafe = -self.left_x;
        let rot = -self.right_x;

        let denom = sum_abs(&[fwd, strafe, rot]).max(1.0);

        WheelSpeeds {
            lf: (fwd + strafe + rot) / denom,
            lr: (fwd - strafe + rot) / denom,
            rf: (fwd - strafe - rot) / denom,
            rr: (fwd + strafe - rot) / denom,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sticks(left_x: f64, left_y: f64, right_x: f64) -> DriveSticks {
        DriveSticks {
            left_x,
            left_y,
            right_x,
        }
    }

    #[test]
    fn test_mecanum_forward() {
        let w = sticks(0.0, 1.0, 0.0).calc_mecanum();
        assert_eq!(
            w,
            WheelSpeeds {
                lf: 1.0,
                lr: 1.0,
                rf: 1.0,
                rr: 1.0
            }
        );
    }

    #[test]
    fn test_mecanum_normalised() {
        let w = sticks(1.0, 1.0, 0.0).calc_mecanum();
        assert_eq!(
            w,
            WheelSpeeds {
                lf: 0.0,
                lr: 1.0,
                rf: 1.0,
                rr: 0.0
            }
        );
    }

    #[test]
    fn test_mecanum_rotation() {
        let w = sticks(0.0, 0.0, 0.5).calc_mecanum();
        assert_eq!(
            w,
            WheelSpeeds {
                lf: -0.5,
                lr: -0.5,
                rf: 0.5,
                rr: 0.5
            }
        );
    }

    #[test]
    fn test_mecanum_never_exceeds_one() {
        let steps = [-1.0, -0.6, -0.1, 0.0, 0.4, 1.0];
        for x in steps.iter() {
            for y in steps.iter() {
                for r in steps.iter() {
                    let w = sticks(*x, *y, *r).calc_mecanum();
                    for v in [w.lf, w.lr, w.rf, w.rr].iter() {
                        assert!(v.abs() <= 1.0 + 1e-12, "{:?} from ({}, {}, {})", w, x, y, r);
                    }
                }
            }
        }
    }
}
