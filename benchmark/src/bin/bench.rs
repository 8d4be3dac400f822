use airlift_benchmark::InstanceReport;
use airlift_core::problem::instances::{air_cargo_p1, air_cargo_p2, air_cargo_p3};
use anyhow::anyhow;
use cli_table::format::Justify;
use cli_table::{print_stdout, Cell, CellStruct, Style, Table};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bench",
    about = "Reports grounding statistics and initial heuristic estimates for the air cargo benchmark instances."
)]
pub struct Opt {
    /// Instance to report on (p1, p2 or p3). All three when omitted.
    #[structopt(short = "p", long = "problem")]
    problem: Option<String>,
    /// Emit the reports as JSON instead of a table.
    #[structopt(long = "json")]
    json: bool,
}

fn report(label: &str) -> anyhow::Result<InstanceReport> {
    let problem = match label {
        "p1" => air_cargo_p1()?,
        "p2" => air_cargo_p2()?,
        "p3" => air_cargo_p3()?,
        _ => return Err(anyhow!("unknown problem \"{}\", expected p1, p2 or p3", label)),
    };
    Ok(InstanceReport::new(label, &problem))
}

fn row(report: &InstanceReport) -> Vec<CellStruct> {
    let mut cells = vec![
        report.label.as_str().cell(),
        report.cargos.cell().justify(Justify::Right),
        report.planes.cell().justify(Justify::Right),
        report.airports.cell().justify(Justify::Right),
        report.fluents.cell().justify(Justify::Right),
        report.load_actions.cell().justify(Justify::Right),
        report.unload_actions.cell().justify(Justify::Right),
        report.fly_actions.cell().justify(Justify::Right),
        report.total_actions.cell().justify(Justify::Right),
    ];
    for estimate in &report.initial_estimates {
        cells.push(estimate.estimate.cell().justify(Justify::Right));
    }
    cells
}

fn main() -> anyhow::Result<()> {
    let opt: Opt = Opt::from_args();

    let reports = match &opt.problem {
        Some(label) => vec![report(label)?],
        None => ["p1", "p2", "p3"]
            .into_iter()
            .map(report)
            .collect::<anyhow::Result<Vec<InstanceReport>>>()?,
    };

    if opt.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let mut title = vec![
        "instance".cell().bold(true),
        "cargos".cell().bold(true),
        "planes".cell().bold(true),
        "airports".cell().bold(true),
        "fluents".cell().bold(true),
        "load".cell().bold(true),
        "unload".cell().bold(true),
        "fly".cell().bold(true),
        "actions".cell().bold(true),
    ];
    for estimate in &reports[0].initial_estimates {
        title.push(format!("h({})", estimate.heuristic).cell().bold(true));
    }

    let table = reports.iter().map(row).collect::<Vec<_>>().table().title(title);
    print_stdout(table)?;
    Ok(())
}
