//! The static algorithm catalog.
//!
//! Every algorithm the engine can trace is described here: slug, display
//! name, category, prose description, and complexity figures. The
//! [`Catalog`] is an insertion-ordered registry keyed by slug so front ends
//! can render the selection list in a stable order.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The algorithms the engine knows how to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
}

/// Whether an algorithm sorts the array or searches within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
}

impl Algorithm {
    /// All algorithms in catalog order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
    ];

    /// Stable identifier used for lookup and on the wire.
    pub fn slug(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::LinearSearch => "linear-search",
            Algorithm::BinarySearch => "binary-search",
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
        }
    }

    /// Which catalog category the algorithm belongs to.
    pub fn category(&self) -> Category {
        match self {
            Algorithm::BubbleSort | Algorithm::InsertionSort | Algorithm::QuickSort => {
                Category::Sorting
            }
            Algorithm::LinearSearch | Algorithm::BinarySearch => Category::Searching,
        }
    }

    /// Returns `true` if the algorithm needs a target value (searches).
    pub fn requires_target(&self) -> bool {
        matches!(self.category(), Category::Searching)
    }

    /// Resolves a slug back to its algorithm.
    pub fn from_slug(slug: &str) -> Result<Algorithm, CoreError> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.slug() == slug)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                slug: slug.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Sorting => write!(f, "sorting"),
            Category::Searching => write!(f, "searching"),
        }
    }
}

/// Catalog entry: everything a front end shows about one algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    pub description: &'static str,
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
}

/// Insertion-ordered registry of all catalog entries, keyed by slug.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: IndexMap<&'static str, AlgorithmInfo>,
}

impl Catalog {
    /// Builds the catalog with all five algorithms registered in display
    /// order: the three sorts, then the two searches.
    pub fn new() -> Self {
        let mut entries = IndexMap::new();

        let infos = [
            AlgorithmInfo {
                algorithm: Algorithm::BubbleSort,
                description: "A simple sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                time_best: "O(n)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            AlgorithmInfo {
                algorithm: Algorithm::InsertionSort,
                description: "Builds the sorted array one element at a time by shifting elements that are larger than the current element to the right.",
                time_best: "O(n)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            AlgorithmInfo {
                algorithm: Algorithm::QuickSort,
                description: "A divide-and-conquer algorithm that works by selecting a pivot element and partitioning the array around the pivot.",
                time_best: "O(n log n)",
                time_average: "O(n log n)",
                time_worst: "O(n²)",
                space: "O(log n)",
            },
            AlgorithmInfo {
                algorithm: Algorithm::LinearSearch,
                description: "A sequential search algorithm that starts at the beginning of the list and checks each element until the target is found.",
                time_best: "O(1)",
                time_average: "O(n)",
                time_worst: "O(n)",
                space: "O(1)",
            },
            AlgorithmInfo {
                algorithm: Algorithm::BinarySearch,
                description: "A divide and conquer algorithm that finds the position of a target value within a sorted array.",
                time_best: "O(1)",
                time_average: "O(log n)",
                time_worst: "O(log n)",
                space: "O(1)",
            },
        ];

        for info in infos {
            entries.insert(info.algorithm.slug(), info);
        }

        Catalog { entries }
    }

    /// Looks up a catalog entry by slug.
    pub fn get(&self, slug: &str) -> Option<&AlgorithmInfo> {
        self.entries.get(slug)
    }

    /// Looks up a catalog entry by slug, failing with
    /// [`CoreError::UnknownAlgorithm`] when absent.
    pub fn require(&self, slug: &str) -> Result<&AlgorithmInfo, CoreError> {
        self.get(slug).ok_or_else(|| CoreError::UnknownAlgorithm {
            slug: slug.to_string(),
        })
    }

    /// Iterates over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmInfo> {
        self.entries.values()
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
