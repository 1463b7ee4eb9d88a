//! Embedded PageRank scores of core Debian packages, 2015–2022.

use crate::models::{Chart, Series};

const YEARS_2015_2022: [f64; 8] = [
    2015.0, 2016.0, 2017.0, 2018.0, 2019.0, 2020.0, 2021.0, 2022.0,
];
const YEARS_2018_2022: [f64; 5] = [2018.0, 2019.0, 2020.0, 2021.0, 2022.0];

pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "PageRank";

/// The eight package series in legend order.
///
/// "libjs-jquery" is drawn from its own declared 2018–2022 arrays. An earlier
/// plotting script drew perl's arrays under that label, so charts made with it
/// show a copy of the perl line instead; this deliberately does not repeat that.
pub fn pagerank_series() -> Vec<Series> {
    let full = |name: &str, y: [f64; 8]| Series::new(name, YEARS_2015_2022.to_vec(), y.to_vec());

    vec![
        full(
            "libc6",
            [0.1550, 0.2095, 0.2552, 0.2400, 0.2571, 0.2642, 0.2548, 0.2811],
        ),
        full(
            "libgcc1",
            [0.1253, 0.1689, 0.2202, 0.1970, 0.2260, 0.2218, 0.2243, 0.1906],
        ),
        full(
            "multiarch-support",
            [0.0789, 0.0907, 0.0772, 0.0571, 0.0583, 0.0500, 0.0457, 0.0387],
        ),
        full(
            "zlib1g",
            [0.0148, 0.0, 0.0071, 0.0060, 0.0054, 0.0055, 0.0058, 0.0063],
        ),
        full(
            "dpkg",
            [0.0050, 0.0074, 0.0066, 0.0062, 0.0079, 0.0065, 0.0080, 0.0070],
        ),
        full(
            "gcc",
            [0.0139, 0.0075, 0.0074, 0.0152, 0.0149, 0.0121, 0.0107, 0.0087],
        ),
        full(
            "perl",
            [0.0092, 0.0069, 0.0083, 0.0093, 0.0082, 0.0081, 0.0082, 0.0072],
        ),
        Series::new(
            "libjs-jquery",
            YEARS_2018_2022.to_vec(),
            vec![0.0193, 0.0040, 0.0165, 0.0217, 0.0132],
        ),
    ]
}

/// The full chart: all package series on "Year" / "PageRank" axes with a legend.
pub fn pagerank_chart() -> Chart {
    Chart::new(pagerank_series(), X_LABEL, Y_LABEL)
}
