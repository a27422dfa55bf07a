//! Raw scan to point set conversion.

use crate::core::types::{PoseDelta, ScanPoint, ScanPointSet};
use crate::error::{CoreSlamError, Result};
use crate::sensors::lidar::{NO_DETECTION, SensorProfile};

/// Converts raw range arrays from one scanner into point sets.
///
/// Owns a validated copy of the [`SensorProfile`], so a builder that exists
/// can never meet a nonsensical profile mid-cycle.
#[derive(Debug, Clone)]
pub struct ScanBuilder {
    profile: SensorProfile,
}

impl ScanBuilder {
    /// Create a builder, rejecting invalid profiles.
    pub fn new(profile: SensorProfile) -> Result<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// The scanner this builder serves.
    pub fn profile(&self) -> &SensorProfile {
        &self.profile
    }

    /// Check a raw scan's length against the profile.
    pub fn check_len(&self, raw_ranges: &[i32]) -> Result<()> {
        if raw_ranges.len() != self.profile.ray_count {
            return Err(CoreSlamError::ScanLengthMismatch {
                expected: self.profile.ray_count,
                actual: raw_ranges.len(),
            });
        }
        Ok(())
    }

    /// Build the point set of one raw scan.
    ///
    /// Each surviving ray expands into `span` sub-rays. For `span > 1` the
    /// sub-rays are corrected for the motion in `pose_delta`: a ray acquired
    /// `k` degrees into the sweep is rotated by the heading change and pulled
    /// back by the travel accumulated over those `k` degrees. With `span == 1`
    /// the geometry is taken as-is. A `span` of 0 is treated as 1.
    pub fn build(
        &self,
        raw_ranges: &[i32],
        pose_delta: &PoseDelta,
        span: usize,
    ) -> Result<ScanPointSet> {
        self.check_len(raw_ranges)?;

        let profile = &self.profile;
        let span = span.max(1);
        let fov = profile.field_of_view_degrees;

        // Sweep-time correction, in units of degrees swept
        let (horz_mm_per_degree, rotation) = if span > 1 {
            let (v_mm_s, w_deg_s) = pose_delta.velocities();
            let dps = profile.degrees_per_second();
            (v_mm_s / dps, 1.0 + w_deg_s / dps)
        } else {
            (0.0, 1.0)
        };

        let rays = profile.usable_rays();
        let step = fov / (profile.ray_count * span - 1) as f64;
        let mut set = ScanPointSet::with_capacity(span, rays.len() * span);

        for i in rays {
            let range = raw_ranges[i];
            if range <= NO_DETECTION || range as f64 >= profile.max_range_mm {
                continue;
            }
            let distance = range as f64;

            for j in 0..span {
                let k = (i * span + j) as f64 * step;
                let (sin_a, cos_a) = (-fov / 2.0 + k * rotation).to_radians().sin_cos();
                set.push(ScanPoint {
                    x_mm: distance * cos_a - k * horz_mm_per_degree,
                    y_mm: distance * sin_a,
                    distance_mm: distance,
                });
            }
        }

        log::trace!(
            "Built span-{} scan: {} points from {} rays",
            span,
            set.len(),
            raw_ranges.len()
        );
        Ok(set)
    }
}

/// Build a point set without keeping a [`ScanBuilder`] around.
pub fn build(
    raw_ranges: &[i32],
    pose_delta: &PoseDelta,
    sensor_profile: &SensorProfile,
    span: usize,
) -> Result<ScanPointSet> {
    ScanBuilder::new(sensor_profile.clone())?.build(raw_ranges, pose_delta, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn urg() -> SensorProfile {
        SensorProfile::urg04lx(70, 145.0)
    }

    #[test]
    fn test_uniform_scan_keeps_untrimmed_rays() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let set = builder.build(&[2000; 682], &PoseDelta::zero(), 1).unwrap();
        assert_eq!(set.len(), 682 - 2 * 70);
        assert_eq!(set.span(), 1);
        for p in &set {
            assert_relative_eq!(p.x_mm.hypot(p.y_mm), 2000.0, epsilon = 1e-6);
            assert_relative_eq!(p.distance_mm, 2000.0);
        }
    }

    #[test]
    fn test_span_multiplies_points() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let set = builder.build(&[2000; 682], &PoseDelta::zero(), 3).unwrap();
        assert_eq!(set.len(), 3 * (682 - 2 * 70));
    }

    #[test]
    fn test_drops_no_detection_and_far_rays() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let mut raw = vec![1500; 682];
        raw[100] = NO_DETECTION;
        raw[200] = 4000;
        raw[300] = 9000;
        raw[400] = -5;
        let set = builder.build(&raw, &PoseDelta::zero(), 1).unwrap();
        assert_eq!(set.len(), 682 - 140 - 4);
    }

    #[test]
    fn test_all_no_detection_is_empty() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let set = builder.build(&[NO_DETECTION; 682], &PoseDelta::zero(), 3).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_ray_angles_match_profile() {
        let profile = SensorProfile::urg04lx(0, 0.0);
        let builder = ScanBuilder::new(profile.clone()).unwrap();
        let mut raw = vec![NO_DETECTION; 682];
        raw[0] = 1000;
        raw[681] = 1000;
        let set = builder.build(&raw, &PoseDelta::zero(), 1).unwrap();
        assert_eq!(set.len(), 2);

        let first = set.points()[0];
        assert_relative_eq!(
            first.y_mm.atan2(first.x_mm).to_degrees(),
            -120.0,
            epsilon = 1e-9
        );
        let last = set.points()[1];
        assert_relative_eq!(last.y_mm.atan2(last.x_mm).to_degrees(), 120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_span_one_ignores_motion() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let still = builder.build(&[2000; 682], &PoseDelta::zero(), 1).unwrap();
        let moving = builder
            .build(&[2000; 682], &PoseDelta::new(200.0, 30.0, 0.1), 1)
            .unwrap();
        assert_eq!(still.points(), moving.points());
    }

    #[test]
    fn test_forward_motion_pulls_later_rays_back() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let still = builder.build(&[2000; 682], &PoseDelta::zero(), 3).unwrap();
        let moving = builder
            .build(&[2000; 682], &PoseDelta::new(100.0, 0.0, 0.1), 3)
            .unwrap();

        // 1000 mm/s over 3600 deg/s is 0.2778 mm per degree swept; the last
        // sub-ray comes 215.35 degrees into the sweep
        let first_shift = still.points()[0].x_mm - moving.points()[0].x_mm;
        let last = still.len() - 1;
        let last_shift = still.points()[last].x_mm - moving.points()[last].x_mm;
        assert!(first_shift > 0.0);
        assert!(last_shift > first_shift);
        assert_relative_eq!(last_shift, 215.354 / 3.6, epsilon = 0.01);
    }

    #[test]
    fn test_rotation_spreads_later_sub_rays() {
        let builder = ScanBuilder::new(SensorProfile::urg04lx(0, 0.0)).unwrap();
        let mut raw = vec![NO_DETECTION; 682];
        raw[0] = 1000;
        raw[681] = 1000;
        // 360 deg/s against a 3600 deg/s sweep: angles stretch by 10%
        let turning = PoseDelta::new(0.0, 36.0, 0.1);

        let still = builder.build(&raw, &PoseDelta::zero(), 3).unwrap();
        let moving = builder.build(&raw, &turning, 3).unwrap();
        assert_eq!(moving.len(), 6);

        let angle = |x: f64, y: f64| y.atan2(x).to_degrees();
        for (a, b) in still.iter().zip(moving.iter()) {
            let k = angle(a.x_mm, a.y_mm) + 120.0;
            assert_relative_eq!(
                angle(b.x_mm, b.y_mm) - angle(a.x_mm, a.y_mm),
                k * 0.1,
                epsilon = 1e-9
            );
            assert_relative_eq!(b.x_mm.hypot(b.y_mm), 1000.0, epsilon = 1e-9);
        }
        let last = moving.points()[5];
        assert_relative_eq!(angle(last.x_mm, last.y_mm), 144.0, epsilon = 1e-9);

        let single = builder.build(&raw, &turning, 1).unwrap();
        let reference = builder.build(&raw, &PoseDelta::zero(), 1).unwrap();
        assert_eq!(single.points(), reference.points());
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let builder = ScanBuilder::new(urg()).unwrap();
        let err = builder.build(&[2000; 100], &PoseDelta::zero(), 1).unwrap_err();
        assert!(matches!(
            err,
            CoreSlamError::ScanLengthMismatch {
                expected: 682,
                actual: 100
            }
        ));
    }

    #[test]
    fn test_free_function_validates_profile() {
        let mut profile = urg();
        profile.ray_count = 0;
        assert!(build(&[], &PoseDelta::zero(), &profile, 1).is_err());
    }
}
