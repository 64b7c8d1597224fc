use std::collections::{HashMap, HashSet};

use crate::types::{ClassifiedInstruction, SolanaTransaction};

/// Groups a transaction's instructions by program id. Within each group,
/// top-level instructions come first in outer order, followed by inner
/// instructions in scan order.
#[derive(Clone, Debug)]
pub struct InstructionClassifier {
    instruction_map: HashMap<String, Vec<ClassifiedInstruction>>,
    order: Vec<String>,
}

impl InstructionClassifier {
    pub fn new(tx: &SolanaTransaction) -> Self {
        let mut instruction_map: HashMap<String, Vec<ClassifiedInstruction>> = HashMap::new();
        let mut order: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (outer_index, instruction) in tx.instructions.iter().enumerate() {
            if instruction.program_id.is_empty() {
                continue;
            }
            let program_id = &instruction.program_id;
            instruction_map
                .entry(program_id.clone())
                .or_default()
                .push(ClassifiedInstruction {
                    program_id: program_id.clone(),
                    outer_index,
                    inner_index: None,
                    data: instruction.clone(),
                });
            if seen.insert(program_id.clone()) {
                order.push(program_id.clone());
            }
        }

        for inner in &tx.inner_instructions {
            for (inner_index, instruction) in inner.instructions.iter().enumerate() {
                if instruction.program_id.is_empty() {
                    continue;
                }
                let program_id = &instruction.program_id;
                instruction_map
                    .entry(program_id.clone())
                    .or_default()
                    .push(ClassifiedInstruction {
                        program_id: program_id.clone(),
                        outer_index: inner.index,
                        inner_index: Some(inner_index),
                        data: instruction.clone(),
                    });
                if seen.insert(program_id.clone()) {
                    order.push(program_id.clone());
                }
            }
        }

        Self {
            instruction_map,
            order,
        }
    }

    /// Program ids in order of first appearance.
    pub fn program_ids(&self) -> &[String] {
        &self.order
    }

    /// All instructions recorded for one program id.
    pub fn get_instructions(&self, program_id: &str) -> &[ClassifiedInstruction] {
        self.instruction_map
            .get(program_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
