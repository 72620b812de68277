// Copyright 2025 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value kinds, tagged property values, and the paste-selection mask.

use alloc::string::String;
use core::fmt;

/// The kind of value a property holds.
///
/// This is a fixed, closed set supplied by the host's object definitions;
/// the core never invents new kinds at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A single floating-point value (sliders, toggles stored as 0/1, etc.).
    Scalar,
    /// A four-component vector. Colors and plain vectors share this slot.
    Vector,
    /// A reference to a texture asset, by name.
    Texture,
    /// A string keyword selected for a keyword-backed property.
    Keyword,
    /// The target's integer render-order value.
    RenderOrder,
}

impl ValueKind {
    /// Returns the single-bit mask selecting exactly this kind.
    #[must_use]
    #[inline]
    pub const fn mask(self) -> ValueKindMask {
        match self {
            Self::Scalar => ValueKindMask::SCALAR,
            Self::Vector => ValueKindMask::VECTOR,
            Self::Texture => ValueKindMask::TEXTURE,
            Self::Keyword => ValueKindMask::KEYWORD,
            Self::RenderOrder => ValueKindMask::RENDER_ORDER,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "Scalar",
            Self::Vector => "Vector",
            Self::Texture => "Texture",
            Self::Keyword => "Keyword",
            Self::RenderOrder => "RenderOrder",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// Bit-set selecting which value kinds a paste operation applies.
    ///
    /// The named composites preserve the exact bit semantics the masked
    /// paste menus rely on: `NUMBER` covers scalars and vectors together,
    /// `ALL` is the union of every kind.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ValueKindMask: u8 {
        /// Scalar values.
        const SCALAR       = 1 << 0;
        /// Vector and color values.
        const VECTOR       = 1 << 1;
        /// Texture references.
        const TEXTURE      = 1 << 2;
        /// Keyword values and the target-level keyword set.
        const KEYWORD      = 1 << 3;
        /// The target-level render order.
        const RENDER_ORDER = 1 << 4;
        /// Scalars and vectors together ("numbers").
        const NUMBER = Self::SCALAR.bits() | Self::VECTOR.bits();
        /// Every kind.
        const ALL = (1 << 5) - 1;
    }
}

impl Default for ValueKindMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// A property value tagged with its kind.
///
/// Values are plain owned data, so cloning one is a deep copy; a snapshot
/// built from `PropertyValue`s never aliases the live target it was read
/// from.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A scalar value.
    Scalar(f32),
    /// A vector or color value.
    Vector([f32; 4]),
    /// A texture reference; `None` means unassigned.
    Texture(Option<String>),
    /// A keyword value.
    Keyword(String),
    /// A render-order value.
    RenderOrder(i32),
}

impl PropertyValue {
    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Vector(_) => ValueKind::Vector,
            Self::Texture(_) => ValueKind::Texture,
            Self::Keyword(_) => ValueKind::Keyword,
            Self::RenderOrder(_) => ValueKind::RenderOrder,
        }
    }
}
