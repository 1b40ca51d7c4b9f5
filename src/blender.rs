use crate::{
    blend::{ self, BlendWeights },
    window::Present,
};

use image::{ ImageError, ImageReader, RgbImage };

use std::{
    error::Error,
    fmt,
    fs,
    path::{ Path, PathBuf },
    time::Instant,
};

pub const OUTPUT_FILENAME: &str = "blended_image.jpg";

#[derive(Debug, Clone)]
pub struct BlendConfig{
    pub path1: PathBuf,
    pub path2: PathBuf,
    pub out_dir: PathBuf,
    pub weights: BlendWeights,
}

impl Default for BlendConfig{
    fn default() -> Self{
        Self{
            path1: PathBuf::from("image1.jpg"),
            path2: PathBuf::from("image2.jpg"),
            out_dir: PathBuf::from("results"),
            weights: BlendWeights::default(),
        }
    }
}

#[derive(Debug)]
pub enum BlendError{
    MissingInput(PathBuf),
    Decode(PathBuf, ImageError),
    Write(PathBuf, ImageError),
}

impl fmt::Display for BlendError{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self {
            Self::MissingInput(p) => write!(f, "input image does not exist: {}", p.display()),
            Self::Decode(p, e) => write!(f, "could not decode {}: {}", p.display(), e),
            Self::Write(p, e) => write!(f, "could not write {}: {}", p.display(), e),
        }
    }
}

impl Error for BlendError{
    fn source(&self) -> Option<&(dyn Error + 'static)>{
        match self {
            Self::MissingInput(_) => None,
            Self::Decode(_, e) | Self::Write(_, e) => Some(e),
        }
    }
}

pub fn run(
    config: &BlendConfig,
    presenter: Option<&mut dyn Present>,
) -> Result<PathBuf, BlendError>{
    if !config.out_dir.is_dir() {
        fs::create_dir_all(&config.out_dir)
            .map_err(|e| BlendError::Write(config.out_dir.clone(), ImageError::from(e)))?;
        println!("Created directory: {}", config.out_dir.display());
    }

    for path in [&config.path1, &config.path2] {
        if !path.is_file() {
            return Err(BlendError::MissingInput(path.clone()));
        }
    }

    let timer = Instant::now();
    let one = decode(&config.path1)?;
    let two = decode(&config.path2)?;
    println!("Decode: {}ms", timer.elapsed().as_millis());

    let one = blend::match_size(one, &two);

    let weights = config.weights;
    println!(
        "Blending images with weights {} and {} (gamma {}).",
        weights.alpha, weights.beta, weights.gamma,
    );
    let timer = Instant::now();
    let blended = blend::weighted_sum(&one, &two, weights);
    println!("Blend: {}ms", timer.elapsed().as_millis());

    // the file only appears once the whole blend succeeded in memory
    let out_path = config.out_dir.join(OUTPUT_FILENAME);
    let timer = Instant::now();
    blended.save(&out_path).map_err(|e| BlendError::Write(out_path.clone(), e))?;
    println!("Encode: {}ms", timer.elapsed().as_millis());
    println!("Blended image saved successfully at: {}", out_path.display());

    // the artifact is already on disk, a failing viewer must not undo that
    if let Some(presenter) = presenter {
        if let Err(e) = presenter.present(&blended) {
            println!("Blendimg: could not show the result: {e}");
        }
    }

    Ok(out_path)
}

fn decode(path: &Path) -> Result<RgbImage, BlendError>{
    let img = ImageReader::open(path)
        .map_err(|e| BlendError::Decode(path.to_path_buf(), ImageError::from(e)))?
        .decode()
        .map_err(|e| BlendError::Decode(path.to_path_buf(), e))?;
    Ok(img.into_rgb8())
}
