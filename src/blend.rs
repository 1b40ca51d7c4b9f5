use image::{
    RgbImage,
    imageops::{ self, FilterType },
};

#[derive(Debug, Clone, Copy)]
pub struct BlendWeights{
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl Default for BlendWeights{
    fn default() -> Self{
        Self{ alpha: 0.7, beta: 0.3, gamma: 0.0 }
    }
}

// image two's shape is authoritative: image one is resized, image two never is
pub fn match_size(one: RgbImage, two: &RgbImage) -> RgbImage{
    if one.dimensions() == two.dimensions() {
        one
    } else {
        println!("Images have different sizes. Resizing image 1...");
        imageops::resize(&one, two.width(), two.height(), FilterType::Triangle)
    }
}

pub fn weighted_sum(one: &RgbImage, two: &RgbImage, weights: BlendWeights) -> RgbImage{
    assert_eq!(one.dimensions(), two.dimensions());
    let mut out = RgbImage::new(two.width(), two.height());
    for (o, (a, b)) in out.iter_mut().zip(one.iter().zip(two.iter())) {
        *o = blend_sample(*a, *b, weights);
    }
    out
}

fn blend_sample(a: u8, b: u8, weights: BlendWeights) -> u8{
    let sum = a as f32 * weights.alpha + b as f32 * weights.beta + weights.gamma;
    sum.round().clamp(0.0, 255.0) as u8
}
