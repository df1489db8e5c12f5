//! Wire types of the trivia API.
//!
//! Two endpoints are consumed: `GET /categories?count=N`, answering with a list of [`CategorySummary`], and
//! `GET /category?id=ID`, answering with a single [`CategoryDetails`]. Fields the board does not use are kept optional
//! so that slightly different deployments of the API still decode.
#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identifier of a category on the trivia API.
pub type CategoryId = u64;

pub const DEFAULT_API_URL: &str = "https://rithm-jeopardy.herokuapp.com/api";
pub const CATEGORIES_PATH: &str = "categories";
pub const CATEGORY_PATH: &str = "category";

/// Entry of the `categories` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues_count: Option<u32>,
}

/// Body of the `category` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub clues_count: Option<u32>,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

/// Single clue as served by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl ClueRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            value: None,
            category_id: None,
        }
    }
}
