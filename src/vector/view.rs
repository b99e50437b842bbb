//! Named-field views of vectors (`v.x`, `v.r`, ...).

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

// Every view is `#[repr(C)]` with exactly `N` fields of type `T`, so it has the same layout as
// `[T; N]`. The private unit field prevents construction outside of this module.

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (),
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

/// Color channel names for 3-element vectors.
#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (),
}

/// Color channel names for 4-element vectors.
#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (),
}

macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<T, 1> => X);
view!(Vector<T, 2> => XY);
view!(Vector<T, 3> => XYZ);
view!(Vector<T, 4> => XYZW);

// Second deref step: `v.r` resolves through `v.x`'s view.
view!(XYZ<T> => RGB);
view!(XYZW<T> => RGBA);
