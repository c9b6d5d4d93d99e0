//! Gallery of images produced by radar
//!
//! - [Numbered grid](#numbered-grid)
//! - [Labeled chart](#labeled-chart)
//! - [Text](#text)
//! - [Background fill](#background-fill)
//!
//! Every image is 255x255 with a white background, radius 102 about
//!   (127,127), ring spacing 20.
//!
//! ### Numbered grid
//!
//! Translucent red disk, 3 to 6 dark gray spokes labeled `1.000000`,
//!   `2.000000`, ... and five rings. The first spoke points up.
//!
//! [t06_grid_scenario.rs](../../tests/t06_grid_scenario.rs),
//!   written as `img/line3.png` through `img/line6.png`


//! ### Labeled chart
//!
//! Three spokes 120 degrees apart labeled `ATK`, `DEF` and `MAT`, rings,
//!   no fill.
//!
//! [t07_chart_scenario.rs](../../tests/t07_chart_scenario.rs),
//!   written as `img/chart3.png`


//! ### Text
//!
//! `Hello Go` with its baseline at (20,30).
//!
//! [t04_label.rs](../../tests/t04_label.rs), written as `img/text.png`


//! ### Background fill
//!
//! Only the translucent red disk.
//!
//! [t03_polar.rs](../../tests/t03_polar.rs), written as
//!   `img/fill_background.png`
