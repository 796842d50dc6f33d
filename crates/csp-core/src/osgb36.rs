//! OSGB36 national grid to WGS84 conversion.
//!
//! Four pure stages: an inverse transverse Mercator projection recovers
//! OSGB36 latitude/longitude on the Airy 1830 ellipsoid, the geodetic
//! coordinates go to 3-D Cartesian, a fixed seven-parameter Helmert shift
//! moves the point onto the WGS84 datum, and an iterative conversion returns
//! geodetic coordinates on the GRS80 ellipsoid. All constants are the
//! published national grid and transformation values. Inputs outside the
//! grid extent produce mathematically defined but geographically
//! meaningless output; range checking belongs to callers.

// Airy 1830 ellipsoid (OSGB36 datum).
const AIRY_A: f64 = 6_377_563.396;
const AIRY_B: f64 = 6_356_256.909;

// GRS80 ellipsoid (WGS84 datum).
const GRS80_A: f64 = 6_378_137.0;
const GRS80_B: f64 = 6_356_752.314_1;

// National grid projection: central-meridian scale factor, true origin at
// 49N 2W, false origin offsets in meters.
const SCALE_F0: f64 = 0.999_601_271_7;
const ORIGIN_LAT_DEG: f64 = 49.0;
const ORIGIN_LON_DEG: f64 = -2.0;
const FALSE_EASTING: f64 = 400_000.0;
const FALSE_NORTHING: f64 = -100_000.0;

/// Upper bound for meridional-arc refinement steps. In-range northings
/// converge in under ten; far outside the grid the arc's float spacing
/// exceeds the convergence threshold and the residual never settles.
const MAX_ARC_STEPS: usize = 64;

// OSGB36 to WGS84 Helmert parameters: translations in meters, rotations in
// arcseconds, scale in parts per million.
const SHIFT_X: f64 = 446.448;
const SHIFT_Y: f64 = -125.157;
const SHIFT_Z: f64 = 542.060;
const ROT_X_ARCSEC: f64 = 0.150_2;
const ROT_Y_ARCSEC: f64 = 0.247_0;
const ROT_Z_ARCSEC: f64 = 0.842_1;
const SCALE_PPM: f64 = -20.489_4;

/// Converts a grid easting/northing to WGS84 latitude/longitude in degrees.
pub(crate) fn grid_to_wgs84(easting: f64, northing: f64) -> (f64, f64) {
    let (lat, lon) = grid_to_osgb36(easting, northing);
    let (x, y, z) = geodetic_to_cartesian(lat, lon, AIRY_A, AIRY_B);
    let (x, y, z) = helmert_to_wgs84(x, y, z);
    let (lat, lon) = cartesian_to_geodetic(x, y, z, GRS80_A, GRS80_B);
    (lat.to_degrees(), lon.to_degrees())
}

/// Inverse transverse Mercator: grid easting/northing to OSGB36 geodetic
/// coordinates in radians. Roman-numeral terms follow the published national
/// grid projection formulae.
fn grid_to_osgb36(easting: f64, northing: f64) -> (f64, f64) {
    let e2 = eccentricity_squared(AIRY_A, AIRY_B);
    let lat0 = ORIGIN_LAT_DEG.to_radians();
    let lon0 = ORIGIN_LON_DEG.to_radians();

    // Iterate the meridional arc until the residual is below 0.01 mm, up to
    // the step cap.
    let mut lat = lat0 + (northing - FALSE_NORTHING) / (AIRY_A * SCALE_F0);
    for _ in 0..MAX_ARC_STEPS {
        let residual = northing - FALSE_NORTHING - meridional_arc(lat, lat0);
        if residual.abs() < 1e-5 {
            break;
        }
        lat += residual / (AIRY_A * SCALE_F0);
    }

    let sin_lat = lat.sin();
    let w = (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let nu = AIRY_A * SCALE_F0 / w;
    let rho = AIRY_A * SCALE_F0 * (1.0 - e2) / (w * w * w);
    let eta2 = nu / rho - 1.0;

    let tan_lat = lat.tan();
    let tan2 = tan_lat * tan_lat;
    let tan4 = tan2 * tan2;
    let sec_lat = 1.0 / lat.cos();

    let vii = tan_lat / (2.0 * rho * nu);
    let viii =
        tan_lat / (24.0 * rho * nu.powi(3)) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
    let ix = tan_lat / (720.0 * rho * nu.powi(5)) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
    let x = sec_lat / nu;
    let xi = sec_lat / (6.0 * nu.powi(3)) * (nu / rho + 2.0 * tan2);
    let xii = sec_lat / (120.0 * nu.powi(5)) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
    let xiia = sec_lat / (5040.0 * nu.powi(7))
        * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan4 * tan2);

    let de = easting - FALSE_EASTING;
    let de2 = de * de;
    let lat = lat - vii * de2 + viii * de2 * de2 - ix * de2 * de2 * de2;
    let lon = lon0 + x * de - xi * de * de2 + xii * de * de2 * de2 - xiia * de * de2 * de2 * de2;
    (lat, lon)
}

/// Meridional arc length from the true origin to `lat`, in meters.
fn meridional_arc(lat: f64, lat0: f64) -> f64 {
    let n = (AIRY_A - AIRY_B) / (AIRY_A + AIRY_B);
    let n2 = n * n;
    let n3 = n2 * n;
    let dlat = lat - lat0;
    let slat = lat + lat0;
    AIRY_B
        * SCALE_F0
        * ((1.0 + n + 1.25 * n2 + 1.25 * n3) * dlat
            - (3.0 * n + 3.0 * n2 + 2.625 * n3) * dlat.sin() * slat.cos()
            + (1.875 * n2 + 1.875 * n3) * (2.0 * dlat).sin() * (2.0 * slat).cos()
            - (35.0 / 24.0) * n3 * (3.0 * dlat).sin() * (3.0 * slat).cos())
}

/// Geodetic coordinates (radians, ellipsoid height zero) to 3-D Cartesian.
fn geodetic_to_cartesian(lat: f64, lon: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let e2 = eccentricity_squared(a, b);
    let sin_lat = lat.sin();
    let nu = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    let x = nu * lat.cos() * lon.cos();
    let y = nu * lat.cos() * lon.sin();
    let z = nu * (1.0 - e2) * sin_lat;
    (x, y, z)
}

/// Small-angle seven-parameter Helmert transformation onto WGS84.
fn helmert_to_wgs84(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let rx = arcsec_to_radians(ROT_X_ARCSEC);
    let ry = arcsec_to_radians(ROT_Y_ARCSEC);
    let rz = arcsec_to_radians(ROT_Z_ARCSEC);
    let scale = 1.0 + SCALE_PPM * 1e-6;
    (
        SHIFT_X + scale * x - rz * y + ry * z,
        SHIFT_Y + rz * x + scale * y - rx * z,
        SHIFT_Z - ry * x + rx * y + scale * z,
    )
}

/// Cartesian back to geodetic coordinates in radians, iterating the
/// latitude until it is stable to 1e-12 radians.
fn cartesian_to_geodetic(x: f64, y: f64, z: f64, a: f64, b: f64) -> (f64, f64) {
    let e2 = eccentricity_squared(a, b);
    let lon = y.atan2(x);
    let p = x.hypot(y);
    let mut lat = z.atan2(p * (1.0 - e2));
    loop {
        let sin_lat = lat.sin();
        let nu = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let next = (z + e2 * nu * sin_lat).atan2(p);
        let done = (next - lat).abs() < 1e-12;
        lat = next;
        if done {
            return (lat, lon);
        }
    }
}

fn arcsec_to_radians(arcsec: f64) -> f64 {
    (arcsec / 3600.0).to_radians()
}

fn eccentricity_squared(a: f64, b: f64) -> f64 {
    1.0 - (b * b) / (a * a)
}
