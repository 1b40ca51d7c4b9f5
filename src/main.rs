mod blend;
mod blender;
mod window;

use crate::{
    blender::BlendConfig,
    window::BlendWindow,
};

pub fn main() -> Result<(), String> {
    let config = BlendConfig::default();

    let out = blender::run(&config, Some(&mut BlendWindow))
        .vital("Blendimg: could not blend");

    println!("Blendimg: finished ({}).", out.display());
    Ok(())
}

trait Vital<T> {
    fn vital(self, msg: &str) -> T;
}

impl<T, U: std::fmt::Display> Vital<T> for Result<T, U> {
    fn vital(self, msg: &str) -> T {
        match self {
            Ok(res) => res,
            Err(err) => {
                println!("{msg}: {err}");
                std::process::exit(-1);
            },
        }
    }
}
