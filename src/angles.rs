use chrono::{Datelike, NaiveDate};

/// Julian day of the Unix epoch, 1970-01-01 at 0h UT.
pub const UNIX_EPOCH_JULIAN_DAY: f64 = 2_440_587.5;
/// Julian day of the J2000.0 epoch.
pub const J2000_JULIAN_DAY: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Polar radius used for the horizon dip, in meters.
pub const EARTH_RADIUS_M: f64 = 6_356_900.0;
/// Depression of the sun's centre below the horizon at the start of civil dusk.
pub const CIVIL_DEPRESSION: f64 = 6.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Julian day at 0h UT of the given calendar date.
pub fn julian_day(date: NaiveDate) -> f64 {
    let days_since_epoch = date.num_days_from_ce() - 719_163;
    UNIX_EPOCH_JULIAN_DAY + f64::from(days_since_epoch)
}

pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JULIAN_DAY) / DAYS_PER_JULIAN_CENTURY
}

pub fn geom_mean_long_sun(t: f64) -> f64 {
    normalize_angle(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

pub fn geom_mean_anomaly_sun(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

pub fn eccentricity_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

pub fn sun_equation_of_center(t: f64) -> f64 {
    let m = deg_to_rad(geom_mean_anomaly_sun(t));
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

fn nutation_omega(t: f64) -> f64 {
    deg_to_rad(125.04 - 1934.136 * t)
}

pub fn sun_apparent_long(t: f64) -> f64 {
    let true_long = geom_mean_long_sun(t) + sun_equation_of_center(t);
    true_long - 0.00569 - 0.00478 * nutation_omega(t).sin()
}

pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity_of_ecliptic(t) + 0.00256 * nutation_omega(t).cos()
}

pub fn solar_declination(t: f64) -> f64 {
    let e = deg_to_rad(obliquity_correction(t));
    let lambda = deg_to_rad(sun_apparent_long(t));
    rad_to_deg((e.sin() * lambda.sin()).asin())
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = deg_to_rad(obliquity_correction(t));
    let l0 = deg_to_rad(geom_mean_long_sun(t));
    let e = eccentricity_earth_orbit(t);
    let m = deg_to_rad(geom_mean_anomaly_sun(t));
    let y = (epsilon / 2.0).tan().powi(2);

    let eot = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * rad_to_deg(eot)
}

/// Hour angle in degrees at which the sun's centre reaches `zenith`.
///
/// Returns `None` when the sun stays above or below that zenith all day.
pub fn hour_angle_at_zenith(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = deg_to_rad(zenith).cos() / (lat_rad.cos() * dec_rad.cos())
        - lat_rad.tan() * dec_rad.tan();
    if (-1.0..=1.0).contains(&cos_h) {
        Some(rad_to_deg(cos_h.acos()))
    } else {
        None
    }
}

/// Angular depression of the visible horizon for an observer above sea level.
pub fn horizon_dip(elevation: f64) -> f64 {
    if elevation <= 0.0 {
        return 0.0;
    }
    rad_to_deg((EARTH_RADIUS_M / (EARTH_RADIUS_M + elevation)).acos())
}

/// Atmospheric refraction in degrees for a body at the given zenith angle.
pub fn refraction_at_zenith(zenith: f64) -> f64 {
    let elevation = 90.0 - zenith;
    if elevation >= 85.0 {
        return 0.0;
    }
    let te = deg_to_rad(elevation).tan();
    let arc_seconds = if elevation > 5.0 {
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if elevation > -0.575 {
        1735.0
            + elevation * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.774 / te
    };
    arc_seconds / 3600.0
}

/// Zenith angle that the sun's centre must reach for the given depression,
/// corrected for the observer's elevation and refraction.
pub fn twilight_zenith(depression: f64, elevation: f64) -> f64 {
    let zenith = 90.0 + depression + horizon_dip(elevation);
    zenith - refraction_at_zenith(zenith)
}

/// Minutes after 0h UT of `julian_day` at which the sun sets through `zenith`.
///
/// Refined twice, re-evaluating the sun at the previous estimate. The result
/// may exceed a full day for western longitudes.
pub fn setting_minutes_utc(julian_day: f64, latitude: f64, longitude: f64, zenith: f64) -> Option<f64> {
    let mut minutes = MINUTES_PER_DAY / 2.0;
    for _ in 0..2 {
        let t = julian_century(julian_day + minutes / MINUTES_PER_DAY);
        let hour_angle = hour_angle_at_zenith(latitude, solar_declination(t), zenith)?;
        minutes = 720.0 - 4.0 * longitude + 4.0 * hour_angle - equation_of_time(t);
    }
    Some(minutes)
}
