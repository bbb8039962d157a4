//! Off-chain Merkle tree builder matching the contract's leaf encoding and
//! sorted-pair hashing. Used by tests and tooling to produce roots and proofs.

extern crate std;

use soroban_sdk::{Address, BytesN, Env, Vec};
use std::vec::Vec as StdVec;

use crate::merkle::{hash_leaf, hash_pair};

pub struct MerkleTree {
    env: Env,
    /// `levels[0]` are the leaves, the last level holds the root.
    levels: StdVec<StdVec<BytesN<32>>>,
}

impl MerkleTree {
    /// Build a tree over `(recipient, amount)` allocations, in order.
    ///
    /// Panics on an empty allocation list.
    pub fn new(env: &Env, allocations: &[(Address, i128)]) -> Self {
        let leaves = allocations
            .iter()
            .map(|(recipient, amount)| hash_leaf(env, recipient, *amount))
            .collect();
        Self::from_leaves(env, leaves)
    }

    pub fn from_leaves(env: &Env, leaves: StdVec<BytesN<32>>) -> Self {
        assert!(!leaves.is_empty(), "empty tree");

        let mut levels = std::vec![leaves];
        while levels.last().map_or(0, |level| level.len()) > 1 {
            let current = levels.last().unwrap();
            let next = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(env, left, right),
                    // Odd node is promoted unchanged.
                    [single] => single.clone(),
                    _ => unreachable!(),
                })
                .collect();
            levels.push(next);
        }

        MerkleTree {
            env: env.clone(),
            levels,
        }
    }

    pub fn root(&self) -> BytesN<32> {
        self.levels.last().unwrap()[0].clone()
    }

    pub fn leaf(&self, index: usize) -> BytesN<32> {
        self.levels[0][index].clone()
    }

    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Sibling path for the leaf at `index`, ordered from the leaf level up.
    pub fn proof(&self, index: usize) -> Vec<BytesN<32>> {
        assert!(index < self.levels[0].len(), "index out of bounds");

        let mut proof = Vec::new(&self.env);
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = position ^ 1;
            if sibling < level.len() {
                proof.push_back(level[sibling].clone());
            }
            position /= 2;
        }
        proof
    }
}
