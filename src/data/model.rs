use std::fmt;

// ---------------------------------------------------------------------------
// SeriesKind – which half of the interleaved samples
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeriesKind {
    /// Samples at even positions.
    Cpu,
    /// Samples at odd positions.
    Gpu,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::Cpu, SeriesKind::Gpu];
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Cpu => write!(f, "cpu"),
            SeriesKind::Gpu => write!(f, "gpu"),
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesPair – the de-interleaved samples and their shared x-axis
// ---------------------------------------------------------------------------

/// Two series split out of one interleaved sample sequence.
///
/// `coordinates[i] = (i + 1) * 2`, i.e. the matrix size the benchmark ran
/// at for the i-th pair (2, 4, 6, …).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesPair {
    /// Shared x-axis, same length as `cpu`.
    pub coordinates: Vec<f64>,
    /// Samples at positions 0, 2, 4, …
    pub cpu: Vec<f64>,
    /// Samples at positions 1, 3, 5, … – one shorter than `cpu` for odd N.
    pub gpu: Vec<f64>,
}

impl SeriesPair {
    /// De-interleave `samples`; an empty input gives an empty pair.
    pub fn split(samples: &[f64]) -> Self {
        let cpu: Vec<f64> = samples.iter().step_by(2).copied().collect();
        let gpu: Vec<f64> = samples.iter().skip(1).step_by(2).copied().collect();
        let coordinates = (0..cpu.len()).map(|i| ((i + 1) * 2) as f64).collect();

        SeriesPair {
            coordinates,
            cpu,
            gpu,
        }
    }

    /// Rebuild the original sample sequence.
    pub fn interleave(&self) -> Vec<f64> {
        let mut samples = Vec::with_capacity(self.len());
        for (i, &c) in self.cpu.iter().enumerate() {
            samples.push(c);
            if let Some(&g) = self.gpu.get(i) {
                samples.push(g);
            }
        }
        samples
    }

    pub fn series(&self, kind: SeriesKind) -> &[f64] {
        match kind {
            SeriesKind::Cpu => &self.cpu,
            SeriesKind::Gpu => &self.gpu,
        }
    }

    /// `[x, y]` points for one series. The gpu series only uses the first
    /// `gpu.len()` coordinates.
    pub fn points(&self, kind: SeriesKind) -> Vec<[f64; 2]> {
        self.coordinates
            .iter()
            .zip(self.series(kind))
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// `[x, cpu / gpu]` wherever both values exist and gpu is non-zero.
    pub fn speedup(&self) -> Vec<[f64; 2]> {
        self.coordinates
            .iter()
            .zip(self.cpu.iter().zip(&self.gpu))
            .filter(|(_, (_, &g))| g != 0.0)
            .map(|(&x, (&c, &g))| [x, c / g])
            .collect()
    }

    /// Total number of samples (cpu + gpu).
    pub fn len(&self) -> usize {
        self.cpu.len() + self.gpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesStats – summary shown next to the plot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl SeriesStats {
    /// Summary of `values`, or `None` when there is nothing to summarise.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        // No true middle element for an even count: average the two.
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(SeriesStats {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
            median,
        })
    }
}
