//! Demo driver for the scanning core
//!
//! Replays a scripted six-face scan through the session tick loop with a
//! canned solver, writes a preview frame of the proxy, and prints the
//! normalized move list.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use cubescan::app::session::ScanSession;
use cubescan::domain::face::FaceId;
use cubescan::domain::observation::RawObservation;
use cubescan::input::vision::ScriptedVision;
use cubescan::solver::{CannedSolver, PartitionedSolution, PhasePayload};
use cubescan::ui::renderer::ProxyRenderer;

const TICK: Duration = Duration::from_millis(400);
const PREVIEW_SIZE: u32 = 320;
const PREVIEW_PATH: &str = "scan-preview.png";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Scripted "camera": each face seen solid, with idle frames between
    let mut vision = ScriptedVision::new();
    for face in FaceId::SCAN_PRIORITY {
        vision.push_observation(RawObservation::from_labels(&[face.color().label(); 9]));
        vision.push_idle(3);
    }

    let solver = CannedSolver::new(PartitionedSolution {
        cross: PhasePayload::joined("F R Uprime Rprime"),
        f2l: PhasePayload::tokens(&["U2", "Rprime", "U", "R"]),
        oll: PhasePayload::joined("F R U Rprime Uprime Fprime"),
        pll: PhasePayload::tokens(&["R2", "Uprime", "R", "U"]),
    });

    let mut session = ScanSession::new(Box::new(vision), Some(Box::new(solver)));

    let mut now = Instant::now();
    let mut last_frame = session.tick(now);
    for _ in 0..120 {
        if let Some(outcome) = last_frame.committed {
            println!(
                "scanned {} face ({}/6)",
                outcome.face,
                session.store().scanned_count()
            );
        }
        if last_frame.complete {
            break;
        }
        now += TICK;
        last_frame = session.tick(now);
    }

    if !last_frame.complete {
        eprintln!("scan did not complete; aborting");
        return;
    }
    println!("cube complete!");

    let layout = session.project(&last_frame, PREVIEW_SIZE);
    match ProxyRenderer::new().render(&layout) {
        Ok(pixmap) => match pixmap.save_png(PREVIEW_PATH) {
            Ok(()) => println!("preview written to {}", PREVIEW_PATH),
            Err(err) => eprintln!("could not write preview: {}", err),
        },
        Err(err) => eprintln!("preview rendering failed: {}", err),
    }

    match session.solve() {
        Ok(moves) => println!("solution ({} moves): {}", moves.len(), moves.join(" ")),
        Err(err) => eprintln!("solve failed: {}", err),
    }
}
