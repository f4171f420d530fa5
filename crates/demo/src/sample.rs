// File: crates/demo/src/sample.rs
// Summary: Built-in seven-series dataset (pixel coordinates on an 800x400 plot).

use endlabel_core::error::Result;
use endlabel_core::Series;

const SAMPLE: [(&str, [(f64, f64); 8]); 7] = [
    ("범주 1", [(52.0, 340.0), (145.0, 242.0), (243.0, 158.0), (359.0, 236.0), (456.0, 333.0), (541.0, 227.0), (644.0, 148.0), (731.0, 239.0)]),
    ("범주 2", [(57.0, 124.0), (149.0, 321.0), (252.0, 213.0), (355.0, 137.0), (444.0, 321.0), (548.0, 129.0), (643.0, 212.0), (742.0, 323.0)]),
    ("범주 3", [(49.0, 189.0), (143.0, 279.0), (249.0, 198.0), (357.0, 287.0), (442.0, 195.0), (539.0, 278.0), (649.0, 199.0), (737.0, 292.0)]),
    ("범주 4", [(59.0, 295.0), (141.0, 192.0), (255.0, 295.0), (349.0, 188.0), (457.0, 296.0), (544.0, 182.0), (652.0, 292.0), (739.0, 179.0)]),
    ("범주 5", [(54.0, 264.0), (146.0, 169.0), (253.0, 266.0), (351.0, 157.0), (456.0, 263.0), (539.0, 154.0), (641.0, 265.0), (746.0, 166.0)]),
    ("범주 6", [(56.0, 310.0), (147.0, 218.0), (248.0, 308.0), (358.0, 209.0), (453.0, 312.0), (540.0, 210.0), (639.0, 311.0), (734.0, 216.0)]),
    ("범주 7", [(58.0, 234.0), (142.0, 144.0), (250.0, 234.0), (353.0, 137.0), (454.0, 232.0), (547.0, 136.0), (640.0, 238.0), (748.0, 129.0)]),
];

pub fn sample_series() -> Result<Vec<Series>> {
    SAMPLE.iter().map(|(category, points)| Series::from_xy(*category, points)).collect()
}
