use crate::bucket::Granularity;
use crate::chart::{PngRenderer, Renderer};
use crate::cli::CommonArgs;
use crate::error::PlotError;
use crate::git::GitRepo;
use crate::input::RawInputs;
use crate::report::Reporter;
use super::{build_chart, collect_series, file_stem, image_path, output_json, title};
use anyhow::Context;
use chrono::Local;

pub fn exec(common: &CommonArgs, inputs: RawInputs) -> anyhow::Result<()> {
    let reporter = Reporter::new(common.json);
    plot(common, inputs, &reporter)?;
    reporter.finish().context("Failed to write to the terminal")
}

fn plot(common: &CommonArgs, inputs: RawInputs, reporter: &Reporter) -> anyhow::Result<()> {
    let request = match inputs.into_request(reporter) {
        Ok(request) => request,
        Err(PlotError::Config(msg)) => {
            reporter.error(msg);
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read inputs"),
    };

    let collected = collect_series(
        &request,
        |path: &str| GitRepo::open(path),
        &Local,
        !common.json,
        reporter,
    );

    if collected.series.is_empty() {
        reporter.error("No data to plot.");
        return Ok(());
    }

    std::fs::create_dir_all(&common.output_dir).with_context(|| {
        format!("Failed to create output directory {}", common.output_dir.display())
    })?;

    let renderer = PngRenderer::new(common.width, common.height);
    let stem = file_stem(&request);
    let mut saved = Vec::with_capacity(2);

    for granularity in [Granularity::Week, Granularity::Month] {
        let chart = build_chart(&collected.series, granularity, title(&request, granularity));
        let path = image_path(&common.output_dir, &stem, granularity);
        renderer
            .render(&chart, &path)
            .with_context(|| format!("Failed to save {} plot", granularity.adjective()))?;
        reporter.success(format!(
            "Saved {} plot as: {}",
            granularity.adjective(),
            path.display()
        ));
        saved.push(path);
    }

    if common.json {
        output_json(&request, &collected, &saved[0], &saved[1])?;
    }

    Ok(())
}
