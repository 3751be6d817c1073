mod interpolation_scheme;

pub use interpolation_scheme::InterpolationScheme;
