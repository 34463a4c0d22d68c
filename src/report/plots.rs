use itertools_num::linspace;
use ndarray::Array2;
use plotly::color::{NamedColor, Rgba};
use plotly::common::{Fill, Line, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use statrs::statistics::{Data, OrderStatistics};

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
const N_TIME_BINS: usize = 100;

/// Percentile envelope of cumulative event counts over elapsed time.
///
/// All series share the `time_days` axis and start from zero, so the curves
/// plot from the origin. Percentiles are taken across simulations per bin.
#[derive(Debug, Clone)]
pub struct CumulativeEnvelope {
    pub time_days: Vec<f64>,
    pub q025: Vec<f64>,
    pub q25: Vec<f64>,
    pub median: Vec<f64>,
    pub q75: Vec<f64>,
    pub q975: Vec<f64>,
    pub observed: Vec<f64>,
}

/// Bin simulated and observed event epochs onto a common time axis and
/// compute the cumulative-count percentile envelope.
///
/// `simulated` holds one epoch-millisecond event-time sequence per stochastic
/// simulation; `observed` is the observed catalog's event times.
pub fn cumulative_event_envelope(
    simulated: &[Vec<f64>],
    observed: &[f64],
) -> Result<CumulativeEnvelope, String> {
    // Assert that there is at least one simulation to take statistics over
    assert!(!simulated.is_empty(), "At least one simulated event sequence is required");

    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for sequence in simulated {
        for &t in sequence {
            t_min = t_min.min(t);
            t_max = t_max.max(t);
        }
    }
    if !t_min.is_finite() || t_max <= t_min {
        return Err("Simulated event sequences must span a non-empty time range".to_string());
    }

    let bins: Vec<f64> = linspace(t_min, t_max, N_TIME_BINS).collect();
    let dt = bins[1] - bins[0];

    let n_cat = simulated.len();
    let mut counts = Array2::<f64>::zeros((n_cat, N_TIME_BINS));
    for (i, sequence) in simulated.iter().enumerate() {
        for &t in sequence {
            counts[[i, bin_index(&bins, t)]] += 1.0;
        }
        // running sum turns per-bin counts into cumulative counts
        for j in 1..N_TIME_BINS {
            counts[[i, j]] += counts[[i, j - 1]];
        }
    }

    let mut q025 = with_zero_origin(N_TIME_BINS);
    let mut q25 = with_zero_origin(N_TIME_BINS);
    let mut median = with_zero_origin(N_TIME_BINS);
    let mut q75 = with_zero_origin(N_TIME_BINS);
    let mut q975 = with_zero_origin(N_TIME_BINS);
    for j in 0..N_TIME_BINS {
        let mut column = Data::new(counts.column(j).to_vec());
        q025.push(column.quantile(0.025));
        q25.push(column.quantile(0.25));
        median.push(column.quantile(0.5));
        q75.push(column.quantile(0.75));
        q975.push(column.quantile(0.975));
    }

    let mut observed_counts = vec![0.0; N_TIME_BINS];
    for &t in observed {
        observed_counts[bin_index(&bins, t)] += 1.0;
    }
    for j in 1..N_TIME_BINS {
        observed_counts[j] += observed_counts[j - 1];
    }
    let mut observed_cumulative = with_zero_origin(N_TIME_BINS);
    observed_cumulative.extend(observed_counts);

    let mut time_days = with_zero_origin(N_TIME_BINS);
    time_days.extend(bins.iter().map(|&b| (b - t_min + dt) / MILLIS_PER_DAY));

    Ok(CumulativeEnvelope {
        time_days,
        q025,
        q25,
        median,
        q75,
        q975,
        observed: observed_cumulative,
    })
}

/// Plot the median and confidence bands of cumulative event counts against
/// the observed catalog. The returned plot can be saved to a file and its
/// path embedded into a report with `add_result_figure`.
pub fn plot_cumulative_events(
    simulated: &[Vec<f64>],
    observed: &[f64],
    title: &str,
) -> Result<Plot, String> {
    let envelope = cumulative_event_envelope(simulated, observed)?;

    let outer_band = Rgba::new(255, 0, 0, 0.2);
    let inner_band = Rgba::new(255, 0, 0, 0.5);

    let lower_outer = Scatter::new(envelope.time_days.clone(), envelope.q025)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .show_legend(false);
    let upper_outer = Scatter::new(envelope.time_days.clone(), envelope.q975)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .fill(Fill::ToNextY)
        .fill_color(outer_band)
        .name("2.5%-97.5%");
    let lower_inner = Scatter::new(envelope.time_days.clone(), envelope.q25)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .show_legend(false);
    let upper_inner = Scatter::new(envelope.time_days.clone(), envelope.q75)
        .mode(Mode::Lines)
        .line(Line::new().width(0.0))
        .fill(Fill::ToNextY)
        .fill_color(inner_band)
        .name("25%-75%");

    let median_trace = Scatter::new(envelope.time_days.clone(), envelope.median)
        .mode(Mode::Lines)
        .line(Line::new().color(NamedColor::Red))
        .name("Simulated");
    let observed_trace = Scatter::new(envelope.time_days.clone(), envelope.observed)
        .mode(Mode::Lines)
        .line(Line::new().color(NamedColor::Black))
        .name("Observation");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Days since Mainshock"))
        .y_axis(Axis::new().title("Cumulative Event Count"));

    let mut plot = Plot::new();
    plot.add_trace(lower_outer);
    plot.add_trace(upper_outer);
    plot.add_trace(lower_inner);
    plot.add_trace(upper_inner);
    plot.add_trace(median_trace);
    plot.add_trace(observed_trace);
    plot.set_layout(layout);

    Ok(plot)
}

/// Index of the bin holding `t` for ascending bin edges; values outside the
/// range clamp to the first or last bin.
fn bin_index(bins: &[f64], t: f64) -> usize {
    let after = bins.partition_point(|&edge| edge <= t);
    after.saturating_sub(1).min(bins.len() - 1)
}

fn with_zero_origin(capacity: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(capacity + 1);
    values.push(0.0);
    values
}
