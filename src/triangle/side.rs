use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("side '{0}' is not a number")]
    NotANumber(String),
    #[error("side is missing")]
    Missing,
}

/// Conversion of a raw argument into a side length
pub trait ToSide {
    fn to_side(&self) -> Result<f64, Error>;
}

impl ToSide for f64 {
    fn to_side(&self) -> Result<f64, Error> {
        Ok(*self)
    }
}

impl ToSide for f32 {
    fn to_side(&self) -> Result<f64, Error> {
        Ok(f64::from(*self))
    }
}

macro_rules! integer_side {
    ($($int:ty),*) => {
        $(
            impl ToSide for $int {
                fn to_side(&self) -> Result<f64, Error> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

integer_side!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl ToSide for str {
    fn to_side(&self) -> Result<f64, Error> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| Error::NotANumber(self.to_owned()))
    }
}

impl ToSide for &str {
    fn to_side(&self) -> Result<f64, Error> {
        (**self).to_side()
    }
}

impl ToSide for String {
    fn to_side(&self) -> Result<f64, Error> {
        self.as_str().to_side()
    }
}

impl<T: ToSide> ToSide for Option<T> {
    fn to_side(&self) -> Result<f64, Error> {
        match self {
            Some(side) => side.to_side(),
            None => Err(Error::Missing),
        }
    }
}
