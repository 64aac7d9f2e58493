use determinant_calculator::cli;

fn main() {
    env_logger::init();

    cli::run().expect("error while running the determinant calculator");
}
