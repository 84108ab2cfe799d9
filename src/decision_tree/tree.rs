use crate::builder::config::ModelIO;
use crate::data::Category;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::max;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A categorical decision tree.
///
/// A `Branch` holds one child per value of its feature that was present
/// in the training records reaching it, so its map is never empty.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum DecisionTree<V: Category = String, L: Category = String> {
    Leaf(L),
    Branch {
        feature: String,
        children: BTreeMap<V, DecisionTree<V, L>>,
    },
}

impl<V: Category, L: Category> DecisionTree<V, L> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionTree::Leaf(_))
    }

    /// Label held by a leaf.
    pub fn label(&self) -> Option<&L> {
        match self {
            DecisionTree::Leaf(label) => Some(label),
            DecisionTree::Branch { .. } => None,
        }
    }

    /// Feature a branch splits on.
    pub fn feature(&self) -> Option<&str> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Branch { feature, .. } => Some(feature),
        }
    }

    pub fn children(&self) -> Option<&BTreeMap<V, DecisionTree<V, L>>> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Branch { children, .. } => Some(children),
        }
    }

    /// Number of branch levels, a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Branch { children, .. } => 1 + children.values().fold(0, |d, c| max(d, c.depth())),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Branch { children, .. } => children.values().map(|c| c.n_leaves()).sum(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Branch { children, .. } => 1 + children.values().map(|c| c.n_nodes()).sum::<usize>(),
        }
    }

    fn calc_feature_usage(&self, stats: &mut BTreeMap<String, usize>) {
        if let DecisionTree::Branch { feature, children } = self {
            *stats.entry(feature.clone()).or_insert(0) += 1;
            for c in children.values() {
                c.calc_feature_usage(stats);
            }
        }
    }

    /// Number of branches splitting on each feature.
    pub fn feature_usage(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();
        self.calc_feature_usage(&mut stats);
        stats
    }
}

impl<V, L> ModelIO for DecisionTree<V, L>
where
    V: Category + Serialize + DeserializeOwned,
    L: Category + Serialize + DeserializeOwned,
{
}

impl<V: Category + Display, L: Category + Display> DecisionTree<V, L> {
    fn fmt_node(&self, depth: usize, r: &mut String) {
        match self {
            DecisionTree::Leaf(label) => {
                *r += format!("{}-> {}\n", "    ".repeat(depth), label).as_str();
            }
            DecisionTree::Branch { feature, children } => {
                for (value, child) in children {
                    let indent = "    ".repeat(depth);
                    match child {
                        DecisionTree::Leaf(label) => {
                            *r += format!("{}{} = {} -> {}\n", indent, feature, value, label).as_str();
                        }
                        DecisionTree::Branch { .. } => {
                            *r += format!("{}{} = {}\n", indent, feature, value).as_str();
                            child.fmt_node(depth + 1, r);
                        }
                    }
                }
            }
        }
    }
}

impl<V: Category + Display, L: Category + Display> Display for DecisionTree<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut r = String::new();
        self.fmt_node(0, &mut r);
        write!(f, "{}", r)
    }
}
