use crate::core::errors::CastError;
use num_traits::{FromPrimitive, NumCast, ToPrimitive};
use std::{any::type_name, fmt::Display};

pub(crate) fn cast_usize<T>(value: usize) -> Result<T, CastError>
where
    T: FromPrimitive,
{
    T::from_usize(value).ok_or(CastError {
        value: value.to_string(),
        dtype: type_name::<T>(),
    })
}

pub(crate) fn cast_numeric<T, U>(value: T) -> Result<U, CastError>
where
    T: ToPrimitive + Display + Copy,
    U: NumCast,
{
    U::from(value).ok_or_else(|| CastError {
        value: value.to_string(),
        dtype: type_name::<U>(),
    })
}
