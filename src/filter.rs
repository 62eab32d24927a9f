use std::{f32::consts::PI, fmt, str::FromStr};

use crate::{Error, ShCoefficients, SH_ORDER};

/// Windowing applied to the projection kernel to reduce ringing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterProfile {
    #[default]
    Disable,
    Gaussian,
    Hanning,
    Lanczos,
}

impl FilterProfile {
    /// Attenuation of band `level` for a window of width `width`.
    pub fn attenuation(self, level: usize, width: usize) -> f32 {
        let x = PI * level as f32 / width as f32;
        match self {
            Self::Disable => 1.0,
            Self::Gaussian => (-x * x / 2.0).exp(),
            Self::Hanning => {
                if level > width {
                    0.0
                } else {
                    (x.cos() + 1.0) * 0.5
                }
            }
            Self::Lanczos => {
                if level == 0 {
                    1.0
                } else {
                    x.sin() / x
                }
            }
        }
    }

    /// Suffix appended to output file names.
    ///
    /// Every profile uses a dashed suffix, so Lanczos output is
    /// `name-3-l.hdr` rather than the older undashed `name-3l.hdr`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Disable => "",
            Self::Gaussian => "-g",
            Self::Hanning => "-h",
            Self::Lanczos => "-l",
        }
    }
}

impl FromStr for FilterProfile {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "disable" => Ok(Self::Disable),
            "gaussian" | "g" => Ok(Self::Gaussian),
            "hanning" | "h" => Ok(Self::Hanning),
            "lanczos" | "l" => Ok(Self::Lanczos),
            other => Err(format!(
                "unknown filter '{}', expected none, gaussian, hanning or lanczos",
                other
            )),
        }
    }
}

impl fmt::Display for FilterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Disable => "none",
            Self::Gaussian => "gaussian",
            Self::Hanning => "hanning",
            Self::Lanczos => "lanczos",
        })
    }
}

/// Scales every coefficient of band `level` by `attenuation`.
pub fn apply_band(level: usize, attenuation: f32, sh: &mut ShCoefficients) {
    for value in sh.band_mut(level) {
        *value *= attenuation;
    }
}

/// A filter profile bound to an SH order, with per-band gains computed once.
#[derive(Clone, Copy, Debug)]
pub struct Filter {
    profile: FilterProfile,
    gains: [f32; SH_ORDER],
}

impl Filter {
    /// The window width is the SH order.
    pub fn new(profile: FilterProfile, order: usize) -> Result<Self, Error> {
        if order != SH_ORDER {
            return Err(Error::UnsupportedOrder { order });
        }
        let mut gains = [1.0; SH_ORDER];
        for (level, gain) in gains.iter_mut().enumerate() {
            *gain = profile.attenuation(level, order);
        }
        log::debug!("Filter {} band gains: {:?}", profile, gains);
        Ok(Self { profile, gains })
    }

    pub fn profile(&self) -> FilterProfile {
        self.profile
    }

    pub fn gain(&self, level: usize) -> f32 {
        self.gains[level]
    }

    pub fn apply(&self, sh: &mut ShCoefficients) {
        if self.profile == FilterProfile::Disable {
            return;
        }
        for (level, &gain) in self.gains.iter().enumerate() {
            apply_band(level, gain, sh);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> ShCoefficients {
        ShCoefficients::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
    }

    #[test]
    fn apply_band_touches_only_its_band() {
        let mut sh = ramp();
        apply_band(1, 0.5, &mut sh);
        assert_eq!(
            sh.as_slice(),
            &[1.0, 1.0, 1.5, 2.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        apply_band(2, 0.0, &mut sh);
        assert_eq!(sh.band(2), &[0.0; 5]);
        assert_eq!(sh[0], 1.0);
    }

    #[test]
    fn disable_is_identity() {
        let mut sh = ramp();
        Filter::new(FilterProfile::Disable, 3).unwrap().apply(&mut sh);
        assert_eq!(sh, ramp());
    }

    #[test]
    fn lanczos_keeps_dc() {
        for width in 1..8 {
            assert_eq!(FilterProfile::Lanczos.attenuation(0, width), 1.0);
        }
        assert_relative_eq!(
            FilterProfile::Lanczos.attenuation(1, 3),
            (PI / 3.0).sin() / (PI / 3.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn gaussian_decreases_with_band() {
        let filter = Filter::new(FilterProfile::Gaussian, 3).unwrap();
        assert_eq!(filter.gain(0), 1.0);
        assert!(filter.gain(1) < filter.gain(0));
        assert!(filter.gain(2) < filter.gain(1));
        assert_relative_eq!(filter.gain(1), (-(PI / 3.0).powi(2) / 2.0).exp(), epsilon = 1e-6);
    }

    #[test]
    fn hanning_profile() {
        let h = FilterProfile::Hanning;
        assert_eq!(h.attenuation(0, 3), 1.0);
        assert_relative_eq!(h.attenuation(1, 3), 0.75, epsilon = 1e-6);
        assert_relative_eq!(h.attenuation(2, 3), 0.25, epsilon = 1e-6);
        assert_relative_eq!(h.attenuation(3, 3), 0.0, epsilon = 1e-6);
        assert_eq!(h.attenuation(4, 3), 0.0);
    }

    #[test]
    fn parse_and_suffix() {
        assert_eq!("gaussian".parse::<FilterProfile>(), Ok(FilterProfile::Gaussian));
        assert_eq!("H".parse::<FilterProfile>(), Ok(FilterProfile::Hanning));
        assert_eq!("none".parse::<FilterProfile>(), Ok(FilterProfile::Disable));
        assert!("box".parse::<FilterProfile>().is_err());
        assert_eq!(FilterProfile::Lanczos.suffix(), "-l");
        assert_eq!(FilterProfile::Disable.suffix(), "");
    }
}
