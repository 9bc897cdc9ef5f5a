/// Data layer: sample loading and series de-interleaving.
///
/// Architecture:
/// ```text
///      data.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  one float per line → Vec<f64>
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ SeriesPair  │  even → cpu, odd → gpu, x = (i + 1) * 2
///   └────────────┘
/// ```

pub mod loader;
pub mod model;
