//! Transaction builder session
//!
//! Owns the standard inputs and outputs of one transaction under
//! construction. Loading an existing transaction classifies each input's
//! unlocking script by its push shape:
//!
//! - exactly two pushes: `<sig> <pubkey>`, a [`PayToAddressInput`]
//! - anything else: left unclassified; the raw input is kept at its
//!   position and written back unchanged by [`TransactionBuilder::to_transaction`]

use log::{debug, warn};

use crate::address::AddressVersions;
use crate::error::{Result, ScriptError};
use crate::input::{PayToAddressInput, StandardInput, StandardTxIn};
use crate::output::StandardOutput;
use crate::push::parse_pushes;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionBuilder {
    pub version: u32,
    pub lock_time: u32,
    inputs: Vec<StandardTxIn>,
    /// Raw inputs no standard form matched, with their position in the
    /// loaded transaction
    unclassified: Vec<(usize, TransactionInput)>,
    outputs: Vec<StandardOutput>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            version: 1,
            lock_time: 0,
            inputs: Vec::new(),
            unclassified: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transaction(tx: &Transaction) -> Result<Self> {
        let mut builder = Self::new();
        builder.set_transaction(tx)?;
        Ok(builder)
    }

    /// Replace the whole session with the contents of `tx`
    ///
    /// Both collections are rebuilt from scratch. If any input fails to
    /// decompose the session is left as it was.
    pub fn set_transaction(&mut self, tx: &Transaction) -> Result<()> {
        let mut inputs = Vec::with_capacity(tx.inputs.len());
        let mut unclassified = Vec::new();
        for (i, input) in tx.inputs.iter().enumerate() {
            match classify_input(i, input)? {
                Some(standard) => inputs.push(standard),
                None => unclassified.push((i, input.clone())),
            }
        }
        let outputs = tx.outputs.iter().map(StandardOutput::from).collect();

        debug!(
            "loaded transaction: {} of {} inputs classified, {} outputs",
            inputs.len(),
            tx.inputs.len(),
            tx.outputs.len()
        );

        self.version = tx.version;
        self.lock_time = tx.lock_time;
        self.inputs = inputs;
        self.unclassified = unclassified;
        self.outputs = outputs;
        Ok(())
    }

    pub fn inputs(&self) -> &[StandardTxIn] {
        &self.inputs
    }

    /// Raw inputs kept as loaded, each with its position in the transaction
    pub fn unclassified_inputs(&self) -> &[(usize, TransactionInput)] {
        &self.unclassified
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut StandardTxIn> {
        self.inputs.get_mut(index)
    }

    pub fn outputs(&self) -> &[StandardOutput] {
        &self.outputs
    }

    pub fn add_input(&mut self, input: impl Into<StandardTxIn>) {
        self.inputs.push(input.into());
    }

    pub fn add_output(&mut self, output: StandardOutput) {
        self.outputs.push(output);
    }

    /// Append an output paying `value` to `address`
    pub fn pay_to(&mut self, address: &str, value: u64, versions: AddressVersions) -> Result<()> {
        self.outputs.push(StandardOutput::new(address, value, versions)?);
        Ok(())
    }

    pub fn clear_inputs(&mut self) {
        self.inputs.clear();
        self.unclassified.clear();
    }

    pub fn clear_outputs(&mut self) {
        self.outputs.clear();
    }

    /// Raw transaction with every unlocking script built in `mode`
    ///
    /// Unclassified inputs go back at their loaded positions, byte for byte;
    /// standard inputs fill the remaining slots in order.
    pub fn to_transaction(&self, mode: ScriptSigMode) -> Result<Transaction> {
        let mut inputs = Vec::with_capacity(self.inputs.len() + self.unclassified.len());
        let mut raw = self.unclassified.iter().peekable();
        let mut standard = self.inputs.iter();
        loop {
            if let Some((_, input)) = raw.next_if(|(position, _)| *position <= inputs.len()) {
                inputs.push(input.clone());
                continue;
            }
            match standard.next() {
                Some(input) => inputs.push(input.to_transaction_input(mode)?),
                None => break,
            }
        }
        inputs.extend(raw.map(|(_, input)| input.clone()));

        Ok(Transaction {
            version: self.version,
            inputs,
            outputs: self.outputs.iter().map(StandardOutput::to_transaction_output).collect(),
            lock_time: self.lock_time,
        })
    }

    /// Unlocking script of the standard input at `index` (as in [`Self::inputs`]), e.g. the substitute script while
    /// hashing that input for signing
    pub fn unlocking_script(&self, index: usize, mode: ScriptSigMode) -> Option<Result<ByteString>> {
        self.inputs
            .get(index)
            .map(|input| input.build_unlocking_script(mode))
    }
}

/// Typed input for a raw input, or `None` if its shape is not recognized
fn classify_input(index: usize, input: &TransactionInput) -> Result<Option<StandardTxIn>> {
    let objects = match parse_pushes(&input.script_sig) {
        Ok(objects) => objects,
        Err(ScriptError::MalformedPush { offset }) => {
            return Err(ScriptError::PushOverrun { input_index: index, offset });
        }
        Err(ScriptError::NonPushOpcode { offset, opcode }) => {
            warn!("input {index}: opcode {opcode:#04x} at byte {offset} is not a push, left unclassified");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    match <[ByteString; 2]>::try_from(objects) {
        Ok([signature, pub_key]) => {
            debug!("input {index}: pay-to-address");
            Ok(Some(
                PayToAddressInput::from_pushes(input.prevout.clone(), input.sequence, signature, pub_key)
                    .into(),
            ))
        }
        Err(objects) => {
            warn!("input {index}: {} push objects, left unclassified", objects.len());
            Ok(None)
        }
    }
}
