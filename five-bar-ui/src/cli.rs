use crate::{io, prompt};
use five_bar::{
    plot,
    servo::{Leg, Side},
    Angles, Error, FiveBar, Joints, Orient,
};
use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

const APP_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, about)]
pub(crate) struct Entry {
    /// X coordinate of the effector, asked if omitted
    #[clap(allow_negative_numbers = true)]
    x: Option<f64>,
    /// Y coordinate of the effector, asked if omitted
    #[clap(allow_negative_numbers = true)]
    y: Option<f64>,
    /// Orientation of the actuators (in-in, in-out, out-in, out-out), asked
    /// if omitted
    orient: Option<Orient>,
    /// Linkage file in RON format, default to the built-in mechanism
    #[clap(long)]
    cfg: Option<PathBuf>,
    /// Write the active linkage to a RON file
    #[clap(long)]
    dump_cfg: Option<PathBuf>,
    /// Take the mirrored effector position
    #[clap(long)]
    inv: bool,
    /// Add the bearing of the target to the actuator angles
    #[clap(long)]
    bearing: bool,
    /// Print the servo commands of the biped leg on this side (left, right)
    #[clap(long)]
    leg: Option<Side>,
    /// Output path of the figure (in SVG format)
    #[clap(short, long, default_value = "five-bar.svg")]
    output: PathBuf,
    /// Increase the log level (-v for info, -vv for debug)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Entry {
    pub(crate) fn main() -> ExitCode {
        let entry = <Self as clap::Parser>::parse();
        if let Err(e) = init_logger(entry.verbose) {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
        match entry.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                if matches!(e.downcast_ref::<Error>(), Some(e) if e.is_infeasible()) {
                    log::error!("{e:#}");
                    println!("No valid solution for the given input.");
                } else {
                    eprintln!("Error: {e:#}");
                }
                ExitCode::FAILURE
            }
        }
    }

    fn run(self) -> anyhow::Result<()> {
        let Self { x, y, orient, cfg, dump_cfg, inv, bearing, leg, mut output, .. } = self;
        let fb = match cfg {
            Some(path) => io::load_cfg(&path)?,
            None => FiveBar::example(),
        };
        let fb = if inv { fb.with_inv(true) } else { fb };
        log::info!("linkage: {fb:?}");
        if let Some(path) = dump_cfg {
            io::save_cfg(&path, &fb)?;
            log::info!("linkage saved to {}", path.display());
        }
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout();
        let x = match x {
            Some(x) => x,
            None => prompt::ask(&mut stdin, &mut stdout, "Enter X coordinate of end effector: ")?,
        };
        let y = match y {
            Some(y) => y,
            None => prompt::ask(&mut stdin, &mut stdout, "Enter Y coordinate of end effector: ")?,
        };
        let orient = match orient {
            Some(orient) => orient,
            None => prompt::ask_exact(
                &mut stdin,
                &mut stdout,
                "Enter ground beam orientation (in-in, in-out, out-in, out-out): ",
            )?,
        };
        if output.extension().and_then(std::ffi::OsStr::to_str) != Some("svg") {
            output.set_extension("svg");
        }
        solve(&mut stdout, &fb, [x, y], orient, bearing, leg, &output)?;
        println!("Figure saved to {}", output.display());
        Ok(())
    }
}

/// Solve the pose, report it and render it to `output`.
///
/// Nothing is rendered if any step fails.
fn solve<W>(
    w: &mut W,
    fb: &FiveBar,
    target: [f64; 2],
    orient: Orient,
    bearing: bool,
    leg: Option<Side>,
    output: &Path,
) -> anyhow::Result<()>
where
    W: Write,
{
    log::info!("target={target:?}, orient={orient}, bearing={bearing}");
    let angles = if bearing {
        fb.ik_bearing(target, orient)?
    } else {
        fb.ik(target, orient)?
    };
    let joints = fb.fk(angles)?;
    report(w, orient, &angles, &joints)?;
    if let Some(side) = leg {
        report_servo(w, &Leg::example(side), angles)?;
    }
    plot::linkage(plot::SVGBackend::new(output, (800, 600)), &joints, &angles)?;
    Ok(())
}

fn init_logger(verbose: u8) -> anyhow::Result<()> {
    use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}

/// Write the solution in a TOML-like layout.
fn report<W>(w: &mut W, orient: Orient, angles: &Angles, joints: &Joints) -> std::io::Result<()>
where
    W: Write,
{
    let Angles { theta1, theta2 } = *angles;
    let [d1, d2] = angles.to_degrees();
    writeln!(w, "[angles]")?;
    writeln!(w, "orient={orient}")?;
    writeln!(w, "theta1={theta1:.04} # {d1:.2}°")?;
    writeln!(w, "theta2={theta2:.04} # {d2:.2}°")?;
    writeln!(w, "\n[joints]")?;
    let names = ["g1", "a", "p", "b", "g2"];
    for (name, [x, y]) in names.into_iter().zip(joints.to_polyline()) {
        writeln!(w, "{name}=({x:.04}, {y:.04})")?;
    }
    w.flush()
}

fn report_servo<W>(w: &mut W, leg: &Leg, angles: Angles) -> anyhow::Result<()>
where
    W: Write,
{
    let [f, r] = leg.servo_angles(angles);
    let [pf, pr] = leg.pulse_widths(angles)?;
    writeln!(w, "\n[servo]")?;
    writeln!(w, "side={:?}", leg.side)?;
    writeln!(w, "front={f:.2}° # {pf}us")?;
    writeln!(w, "rear={r:.2}° # {pr}us")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_args() {
        let entry = Entry::try_parse_from(["five-bar", "-1.5", "0.5", "out-in", "--inv"]).unwrap();
        assert_eq!(entry.x, Some(-1.5));
        assert_eq!(entry.y, Some(0.5));
        assert_eq!(entry.orient, Some(Orient::OutIn));
        assert!(entry.inv);
        assert_eq!(entry.output, PathBuf::from("five-bar.svg"));
        let entry = Entry::try_parse_from(["five-bar", "-vv"]).unwrap();
        assert_eq!(entry.x, None);
        assert_eq!(entry.verbose, 2);
    }

    #[test]
    fn reject_orient() {
        assert!(Entry::try_parse_from(["five-bar", "1", "1", "In-In"]).is_err());
    }

    #[test]
    fn report_layout() {
        let fb = FiveBar::example();
        let angles = fb.ik([2., 1.5], Orient::InIn).unwrap();
        let joints = fb.fk(angles).unwrap();
        let mut buf = Vec::new();
        report(&mut buf, Orient::InIn, &angles, &joints).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("[angles]\norient=in-in\ntheta1=0.8957 # 51.32°\n"));
        assert!(s.contains("g1=(0.0000, 0.0000)\na=(1.2500, 1.5612)\n"));
        assert!(s.ends_with("g2=(4.0000, 0.0000)\n"));
    }

    #[test]
    fn parse_leg() {
        let entry = Entry::try_parse_from(["five-bar", "--bearing", "--leg", "right"]).unwrap();
        assert!(entry.bearing);
        assert_eq!(entry.leg, Some(Side::Right));
        assert!(Entry::try_parse_from(["five-bar", "--leg", "up"]).is_err());
    }

    #[test]
    fn unreachable_target_renders_nothing() {
        let output = std::env::temp_dir().join("five-bar-ui-unreachable.svg");
        let _ = std::fs::remove_file(&output);
        let fb = FiveBar::example();
        let mut buf = Vec::new();
        let err = solve(&mut buf, &fb, [100., 100.], Orient::InIn, false, None, &output)
            .unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(err, Error::InfeasibleTarget { chain: 1, .. }));
        assert!(buf.is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn solve_and_render() {
        let output = std::env::temp_dir().join("five-bar-ui-solve.svg");
        let fb = FiveBar::example();
        let mut buf = Vec::new();
        solve(&mut buf, &fb, [2., 1.5], Orient::InIn, false, None, &output).unwrap();
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("theta1=51.32"));
        assert!(String::from_utf8(buf).unwrap().starts_with("[angles]\n"));
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn servo_out_of_range_renders_nothing() {
        let output = std::env::temp_dir().join("five-bar-ui-servo.svg");
        let _ = std::fs::remove_file(&output);
        // Front actuator at -14.45°, far below the 145° front servo horn
        let fb = FiveBar::example();
        let mut buf = Vec::new();
        let leg = Some(Side::Left);
        let err = solve(&mut buf, &fb, [2., 1.5], Orient::OutOut, true, leg, &output)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::ServoRange { .. })));
        assert!(!output.exists());
    }
}
