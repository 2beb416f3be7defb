use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use impact_algebra::{Matrix3, Matrix4, Quaternion};

    #[derive(Debug, Parser)]
    #[command(about = "The Impact algebra library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the determinant and inverse of a 3x3 or 4x4 matrix
        Invert {
            /// The 9 or 16 matrix entries, row by row
            #[arg(required = true, num_args = 9..=16, allow_negative_numbers = true)]
            entries: Vec<f64>,
        },
        /// Convert pitch, yaw and roll angles to other rotation representations
        Rotation {
            /// Rotation angle about the x-axis, in radians
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            pitch: f64,

            /// Rotation angle about the y-axis, in radians
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            yaw: f64,

            /// Rotation angle about the z-axis, in radians
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            roll: f64,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Invert { entries } => invert(&entries),
            Command::Rotation { pitch, yaw, roll } => {
                rotation(pitch, yaw, roll);
                Ok(())
            }
        }
    }

    fn invert(entries: &[f64]) -> Result<()> {
        if entries.len() == 9 {
            let matrix = Matrix3::try_from(entries)?;
            log::info!("Inverting {matrix}");
            println!("determinant: {}", matrix.determinant());
            println!("inverse: {}", matrix.inverse());
        } else {
            let matrix = Matrix4::try_from(entries)?;
            log::info!("Inverting {matrix}");
            println!("determinant: {}", matrix.determinant());
            println!("inverse: {}", matrix.inverse());
        }
        Ok(())
    }

    fn rotation(pitch: f64, yaw: f64, roll: f64) {
        let quaternion = Quaternion::from_pitch_yaw_roll(pitch, yaw, roll);
        println!("quaternion: {quaternion}");
        println!("axis-angle: {}", quaternion.to_axis_angle());
        println!("matrix: {}", Matrix4::from_quaternion(&quaternion));
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
