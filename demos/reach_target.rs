use glam::Vec2;
use planar_ik::{CcdSolver, Chain, IkError, SolverOptions};

fn main() -> Result<(), IkError> {
    env_logger::init();

    let mut chain = Chain::builder()
        .add_link(100.0)
        .add_link(75.0)
        .add_link(50.0)
        .build()?;

    let target = Vec2::new(120.0, 50.0);
    let options = SolverOptions {
        max_iterations: 200,
        tolerance: 0.5,
        // The wrist carries a simulated attachment, so it rotates less per
        // step than the unloaded joints.
        joint_masses: vec![0.0, 0.0, 4.0],
        mass_factor: 0.8,
        ..Default::default()
    };

    let result = CcdSolver::solve(&mut chain, target, &options)?;
    println!(
        "success: {}, iterations: {}, distance: {:.4}",
        result.success, result.iterations, result.distance
    );

    for (i, pos) in chain.joint_positions().iter().enumerate() {
        println!("joint {i}: ({:.2}, {:.2})", pos.x, pos.y);
    }
    println!("angles (rad): {:?}", chain.angles());

    Ok(())
}
