//! Properties and the fixed-size board.

use super::types::PlayerId;
use crate::core::constants::{
    BOARD_SIZE, PROPERTY_PRICE_MAX, PROPERTY_PRICE_MIN, PROPERTY_RENT_MAX, PROPERTY_RENT_MIN,
};
use rand::Rng;

/// A single purchasable tile. Price and rent never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub price: i64,
    pub rent: i64,
    pub owner: Option<PlayerId>,
}

impl Property {
    pub fn new(price: i64, rent: i64) -> Self {
        Self {
            price,
            rent,
            owner: None,
        }
    }

    /// Draw price and rent independently from their ranges.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rent = rng.gen_range(PROPERTY_RENT_MIN..=PROPERTY_RENT_MAX);
        let price = rng.gen_range(PROPERTY_PRICE_MIN..=PROPERTY_PRICE_MAX);
        Self::new(price, rent)
    }
}

/// Ordered ring of `BOARD_SIZE` properties; indices are positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Property; BOARD_SIZE],
}

impl Board {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            tiles: std::array::from_fn(|_| Property::random(&mut *rng)),
        }
    }

    pub fn from_tiles(tiles: [Property; BOARD_SIZE]) -> Self {
        Self { tiles }
    }

    /// Same price and rent on every tile.
    pub fn uniform(price: i64, rent: i64) -> Self {
        Self::from_tiles(std::array::from_fn(|_| Property::new(price, rent)))
    }

    pub fn tile(&self, position: usize) -> &Property {
        &self.tiles[position]
    }

    pub fn tile_mut(&mut self, position: usize) -> &mut Property {
        &mut self.tiles[position]
    }

    pub fn tiles(&self) -> &[Property] {
        &self.tiles
    }

    /// Release every tile owned by `owner`. Returns how many were freed.
    pub fn clear_properties(&mut self, owner: PlayerId) -> usize {
        let mut freed = 0;
        for tile in self.tiles.iter_mut().filter(|t| t.owner == Some(owner)) {
            tile.owner = None;
            freed += 1;
        }
        freed
    }

    pub fn owned_by(&self, owner: PlayerId) -> usize {
        self.tiles.iter().filter(|t| t.owner == Some(owner)).count()
    }
}
