use square_cl::{Accel, JobConfig, Result, SquareJob};

const ARRAY_SIZE: usize = 1000;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        for cause in err.iter_causes() {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let data: Vec<f32> = (0..ARRAY_SIZE).map(|i| i as f32).collect();

    let accel = Accel::acquire()?;
    let job = SquareJob::compile(accel, JobConfig::default())?;
    let output = job.run(&data)?;

    let line = output
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);
    Ok(())
}
