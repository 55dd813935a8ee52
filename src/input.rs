//! Standard transaction inputs
//!
//! Three input forms share the [`StandardInput`] contract:
//! - [`PayToAddressInput`]: one key, one signature
//! - [`MultiSigInput`]: bare M-of-N with a signature slot per key
//! - [`ScriptHashInput`]: opaque redeem script plus an ordered signature list
//!
//! [`StandardTxIn`] is the closed union the transaction builder stores.

use log::trace;

use crate::constants::*;
use crate::error::{Result, ScriptError};
use crate::hash::hash160;
use crate::output::pay_to_address_script;
use crate::push::push_data;
use crate::redeem_script::MultiSigRedeemScript;
use crate::types::*;

/// Operations every standard input supports
pub trait StandardInput {
    fn clear_keys(&mut self);

    fn add_key(&mut self, pub_key: &[u8]) -> Result<()>;

    fn clear_signatures(&mut self);

    /// Attach `sig` (without tag) for `pub_key`; the sighash tag is appended.
    fn add_signature(&mut self, pub_key: &[u8], sig: &[u8], sig_hash_type: SigHashType) -> Result<()>;

    /// Unlocking script for the current keys and signatures
    fn build_unlocking_script(&self, mode: ScriptSigMode) -> Result<ByteString>;
}

/// Pay-to-address input: `<sig> <pubkey>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayToAddressInput {
    pub prevout: OutPoint,
    pub sequence: u32,
    pub_key: Option<ByteString>,
    signature: Option<ByteString>,
}

impl PayToAddressInput {
    pub fn new(prevout: OutPoint, sequence: u32) -> Self {
        Self {
            prevout,
            sequence,
            pub_key: None,
            signature: None,
        }
    }

    pub fn with_pub_key(prevout: OutPoint, pub_key: &[u8], sequence: u32) -> Result<Self> {
        let mut input = Self::new(prevout, sequence);
        input.add_key(pub_key)?;
        Ok(input)
    }

    /// Input recovered from an existing `<sig> <pubkey>` unlocking script.
    /// `signature` already carries its sighash tag.
    ///
    /// An empty push is the placeholder edit mode writes for a missing part,
    /// so it loads as absent. Re-emitting in edit mode writes the same
    /// placeholder back.
    pub(crate) fn from_pushes(
        prevout: OutPoint,
        sequence: u32,
        signature: ByteString,
        pub_key: ByteString,
    ) -> Self {
        Self {
            prevout,
            sequence,
            pub_key: (!pub_key.is_empty()).then_some(pub_key),
            signature: (!signature.is_empty()).then_some(signature),
        }
    }

    pub fn pub_key(&self) -> Option<&[u8]> {
        self.pub_key.as_deref()
    }

    /// Signature including its sighash tag
    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }
}

impl StandardInput for PayToAddressInput {
    fn clear_keys(&mut self) {
        self.pub_key = None;
    }

    fn add_key(&mut self, pub_key: &[u8]) -> Result<()> {
        if self.pub_key.is_some() {
            return Err(ScriptError::KeyAlreadySet);
        }
        if pub_key.is_empty() {
            return Err(ScriptError::EmptyKey);
        }
        if pub_key.len() > MAX_PUBKEY_LEN {
            return Err(ScriptError::KeyTooLong(pub_key.len()));
        }
        self.pub_key = Some(pub_key.to_vec());
        Ok(())
    }

    fn clear_signatures(&mut self) {
        self.signature = None;
    }

    fn add_signature(&mut self, pub_key: &[u8], sig: &[u8], sig_hash_type: SigHashType) -> Result<()> {
        match &self.pub_key {
            None => Err(ScriptError::NoKeySet),
            Some(key) if key.as_slice() != pub_key => Err(ScriptError::KeyMismatch),
            Some(_) => {
                self.signature = Some(tagged_signature(sig, sig_hash_type));
                Ok(())
            }
        }
    }

    fn build_unlocking_script(&self, mode: ScriptSigMode) -> Result<ByteString> {
        match mode {
            ScriptSigMode::Sign => {
                let pub_key = self.pub_key.as_ref().ok_or(ScriptError::NoKeySet)?;
                Ok(pay_to_address_script(&hash160(pub_key)))
            }
            ScriptSigMode::Broadcast => {
                let pub_key = self.pub_key.as_ref().ok_or(ScriptError::NoKeySet)?;
                let sig = self.signature.as_ref().ok_or(ScriptError::MissingSignature)?;
                let mut script = Vec::with_capacity(sig.len() + pub_key.len() + 2);
                push_data(&mut script, sig);
                push_data(&mut script, pub_key);
                Ok(script)
            }
            ScriptSigMode::Edit => {
                let mut script = Vec::new();
                push_data(&mut script, self.signature.as_deref().unwrap_or_default());
                push_data(&mut script, self.pub_key.as_deref().unwrap_or_default());
                Ok(script)
            }
        }
    }
}

/// Bare M-of-N input: `OP_FALSE <sig>... <redeem script>`
///
/// Signature slots follow key insertion order, which is also the order the
/// keys appear in the redeem script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSigInput {
    pub prevout: OutPoint,
    pub sequence: u32,
    redeem_script: MultiSigRedeemScript,
    // slot i belongs to redeem_script.pub_keys()[i]; empty means unsigned
    signatures: Vec<ByteString>,
}

impl MultiSigInput {
    pub fn new(prevout: OutPoint, redeem_script: &MultiSigRedeemScript, sequence: u32) -> Self {
        Self {
            prevout,
            sequence,
            redeem_script: redeem_script.clone(),
            signatures: vec![ByteString::new(); redeem_script.pub_key_count()],
        }
    }

    /// Take threshold and keys from `redeem_script`, dropping every signature
    pub fn set_redeem_script(&mut self, redeem_script: &MultiSigRedeemScript) {
        self.redeem_script = redeem_script.clone();
        self.signatures = vec![ByteString::new(); redeem_script.pub_key_count()];
    }

    pub fn redeem_script(&self) -> &MultiSigRedeemScript {
        &self.redeem_script
    }

    pub fn min_sigs(&self) -> u32 {
        self.redeem_script.min_sigs()
    }

    pub fn set_min_sigs(&mut self, min_sigs: u32) -> Result<()> {
        self.redeem_script.set_min_sigs(min_sigs)
    }

    pub fn pub_keys(&self) -> &[ByteString] {
        self.redeem_script.pub_keys()
    }

    /// Signature for `pub_key`, if one has been added
    pub fn signature(&self, pub_key: &[u8]) -> Option<&[u8]> {
        self.slot(pub_key)
            .map(|i| self.signatures[i].as_slice())
            .filter(|sig| !sig.is_empty())
    }

    /// Number of keys that have a signature
    pub fn signature_count(&self) -> usize {
        self.signatures.iter().filter(|sig| !sig.is_empty()).count()
    }

    fn slot(&self, pub_key: &[u8]) -> Option<usize> {
        self.redeem_script
            .pub_keys()
            .iter()
            .position(|key| key.as_slice() == pub_key)
    }
}

impl StandardInput for MultiSigInput {
    fn clear_keys(&mut self) {
        self.redeem_script.clear_pub_keys();
        self.signatures.clear();
    }

    fn add_key(&mut self, pub_key: &[u8]) -> Result<()> {
        if self.slot(pub_key).is_some() {
            return Err(ScriptError::DuplicateKey(hex::encode(pub_key)));
        }
        self.redeem_script.add_pub_key(pub_key)?;
        self.signatures.push(ByteString::new());
        Ok(())
    }

    fn clear_signatures(&mut self) {
        for sig in &mut self.signatures {
            sig.clear();
        }
    }

    fn add_signature(&mut self, pub_key: &[u8], sig: &[u8], sig_hash_type: SigHashType) -> Result<()> {
        let i = self
            .slot(pub_key)
            .ok_or_else(|| ScriptError::UnknownKey(hex::encode(pub_key)))?;
        self.signatures[i] = tagged_signature(sig, sig_hash_type);
        Ok(())
    }

    fn build_unlocking_script(&self, mode: ScriptSigMode) -> Result<ByteString> {
        let redeem_script = self.redeem_script.redeem_script()?;
        if mode == ScriptSigMode::Sign {
            return Ok(redeem_script);
        }

        let mut script = vec![OP_FALSE];
        for sig in &self.signatures {
            if !sig.is_empty() || mode == ScriptSigMode::Edit {
                push_data(&mut script, sig);
            }
        }
        push_data(&mut script, &redeem_script);
        Ok(script)
    }
}

/// Pay-to-script-hash input over an arbitrary redeem script
///
/// Keys are implicit in the redeem script. Signatures are emitted in the order
/// they were added, so the caller orders them to match the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptHashInput {
    pub prevout: OutPoint,
    pub sequence: u32,
    redeem_script: ByteString,
    signatures: Vec<ByteString>,
}

impl ScriptHashInput {
    pub fn new(prevout: OutPoint, redeem_script: ByteString, sequence: u32) -> Self {
        Self {
            prevout,
            sequence,
            redeem_script,
            signatures: Vec::new(),
        }
    }

    pub fn redeem_script(&self) -> &[u8] {
        &self.redeem_script
    }

    pub fn set_redeem_script(&mut self, redeem_script: ByteString) {
        self.redeem_script = redeem_script;
    }

    /// Signatures in insertion order, each with its sighash tag
    pub fn signatures(&self) -> &[ByteString] {
        &self.signatures
    }
}

impl StandardInput for ScriptHashInput {
    fn clear_keys(&mut self) {}

    fn add_key(&mut self, _pub_key: &[u8]) -> Result<()> {
        Ok(())
    }

    fn clear_signatures(&mut self) {
        self.signatures.clear();
    }

    fn add_signature(&mut self, _pub_key: &[u8], sig: &[u8], sig_hash_type: SigHashType) -> Result<()> {
        self.signatures.push(tagged_signature(sig, sig_hash_type));
        Ok(())
    }

    fn build_unlocking_script(&self, _mode: ScriptSigMode) -> Result<ByteString> {
        let mut script = vec![OP_FALSE];
        for sig in &self.signatures {
            push_data(&mut script, sig);
        }
        push_data(&mut script, &self.redeem_script);
        Ok(script)
    }
}

/// Any standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardTxIn {
    PayToAddress(PayToAddressInput),
    MultiSig(MultiSigInput),
    ScriptHash(ScriptHashInput),
}

impl StandardTxIn {
    pub fn prevout(&self) -> &OutPoint {
        match self {
            StandardTxIn::PayToAddress(input) => &input.prevout,
            StandardTxIn::MultiSig(input) => &input.prevout,
            StandardTxIn::ScriptHash(input) => &input.prevout,
        }
    }

    pub fn sequence(&self) -> u32 {
        match self {
            StandardTxIn::PayToAddress(input) => input.sequence,
            StandardTxIn::MultiSig(input) => input.sequence,
            StandardTxIn::ScriptHash(input) => input.sequence,
        }
    }

    /// Raw input carrying the unlocking script for `mode`
    pub fn to_transaction_input(&self, mode: ScriptSigMode) -> Result<TransactionInput> {
        Ok(TransactionInput {
            prevout: self.prevout().clone(),
            script_sig: self.build_unlocking_script(mode)?,
            sequence: self.sequence(),
        })
    }
}

impl StandardInput for StandardTxIn {
    fn clear_keys(&mut self) {
        match self {
            StandardTxIn::PayToAddress(input) => input.clear_keys(),
            StandardTxIn::MultiSig(input) => input.clear_keys(),
            StandardTxIn::ScriptHash(input) => input.clear_keys(),
        }
    }

    fn add_key(&mut self, pub_key: &[u8]) -> Result<()> {
        match self {
            StandardTxIn::PayToAddress(input) => input.add_key(pub_key),
            StandardTxIn::MultiSig(input) => input.add_key(pub_key),
            StandardTxIn::ScriptHash(input) => input.add_key(pub_key),
        }
    }

    fn clear_signatures(&mut self) {
        match self {
            StandardTxIn::PayToAddress(input) => input.clear_signatures(),
            StandardTxIn::MultiSig(input) => input.clear_signatures(),
            StandardTxIn::ScriptHash(input) => input.clear_signatures(),
        }
    }

    fn add_signature(&mut self, pub_key: &[u8], sig: &[u8], sig_hash_type: SigHashType) -> Result<()> {
        match self {
            StandardTxIn::PayToAddress(input) => input.add_signature(pub_key, sig, sig_hash_type),
            StandardTxIn::MultiSig(input) => input.add_signature(pub_key, sig, sig_hash_type),
            StandardTxIn::ScriptHash(input) => input.add_signature(pub_key, sig, sig_hash_type),
        }
    }

    fn build_unlocking_script(&self, mode: ScriptSigMode) -> Result<ByteString> {
        let script = match self {
            StandardTxIn::PayToAddress(input) => input.build_unlocking_script(mode)?,
            StandardTxIn::MultiSig(input) => input.build_unlocking_script(mode)?,
            StandardTxIn::ScriptHash(input) => input.build_unlocking_script(mode)?,
        };
        trace!("built {:?} unlocking script ({} bytes)", mode, script.len());
        Ok(script)
    }
}

impl From<PayToAddressInput> for StandardTxIn {
    fn from(input: PayToAddressInput) -> Self {
        StandardTxIn::PayToAddress(input)
    }
}

impl From<MultiSigInput> for StandardTxIn {
    fn from(input: MultiSigInput) -> Self {
        StandardTxIn::MultiSig(input)
    }
}

impl From<ScriptHashInput> for StandardTxIn {
    fn from(input: ScriptHashInput) -> Self {
        StandardTxIn::ScriptHash(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressVersions;

    fn outpoint() -> OutPoint {
        OutPoint { hash: [0xab; 32], index: 1 }
    }

    fn two_of_three() -> MultiSigRedeemScript {
        let mut script = MultiSigRedeemScript::new(2, AddressVersions::BITCOIN).unwrap();
        script.add_pub_key(&[0x02; 33]).unwrap();
        script.add_pub_key(&[0x03; 33]).unwrap();
        script.add_pub_key(&[0x04; 33]).unwrap();
        script
    }

    #[test]
    fn test_pay_to_address_signature_before_key() {
        let mut input = PayToAddressInput::new(outpoint(), SEQUENCE_FINAL);
        assert_eq!(
            input.add_signature(&[0x02; 33], &[0x30; 70], SigHashType::All),
            Err(ScriptError::NoKeySet)
        );
    }

    #[test]
    fn test_pay_to_address_key_mismatch() {
        let mut input = PayToAddressInput::with_pub_key(outpoint(), &[0x02; 33], SEQUENCE_FINAL).unwrap();
        assert_eq!(
            input.add_signature(&[0x03; 33], &[0x30; 70], SigHashType::All),
            Err(ScriptError::KeyMismatch)
        );
        assert!(input.signature().is_none());
    }

    #[test]
    fn test_pay_to_address_key_already_set() {
        let mut input = PayToAddressInput::with_pub_key(outpoint(), &[0x02; 33], SEQUENCE_FINAL).unwrap();
        assert_eq!(input.add_key(&[0x03; 33]), Err(ScriptError::KeyAlreadySet));
        assert_eq!(input.pub_key(), Some(&[0x02; 33][..]));

        input.clear_keys();
        input.add_key(&[0x03; 33]).unwrap();
        assert_eq!(input.pub_key(), Some(&[0x03; 33][..]));
    }

    #[test]
    fn test_pay_to_address_broadcast() {
        let key = [0x02; 33];
        let mut input = PayToAddressInput::with_pub_key(outpoint(), &key, SEQUENCE_FINAL).unwrap();
        input.add_signature(&key, &[0x30; 71], SigHashType::All).unwrap();

        let script = input.build_unlocking_script(ScriptSigMode::Broadcast).unwrap();
        let mut expected = vec![72];
        expected.extend_from_slice(&[0x30; 71]);
        expected.push(0x01);
        expected.push(33);
        expected.extend_from_slice(&key);
        assert_eq!(script, expected);
        assert_eq!(input.build_unlocking_script(ScriptSigMode::Edit).unwrap(), expected);
    }

    #[test]
    fn test_pay_to_address_signature_overwrite() {
        let key = [0x02; 33];
        let mut input = PayToAddressInput::with_pub_key(outpoint(), &key, SEQUENCE_FINAL).unwrap();
        input.add_signature(&key, &[0x30; 10], SigHashType::All).unwrap();
        input.add_signature(&key, &[0x31; 10], SigHashType::None).unwrap();

        let mut expected = vec![0x31; 10];
        expected.push(0x02);
        assert_eq!(input.signature(), Some(expected.as_slice()));
    }

    #[test]
    fn test_pay_to_address_broadcast_requires_signature() {
        let input = PayToAddressInput::with_pub_key(outpoint(), &[0x02; 33], SEQUENCE_FINAL).unwrap();
        assert_eq!(
            input.build_unlocking_script(ScriptSigMode::Broadcast),
            Err(ScriptError::MissingSignature)
        );

        // edit keeps an empty placeholder where the signature goes
        let script = input.build_unlocking_script(ScriptSigMode::Edit).unwrap();
        assert_eq!(script[0], 0x00);
        assert_eq!(script[1], 33);
        assert_eq!(script.len(), 35);
    }

    #[test]
    fn test_pay_to_address_key_too_long() {
        let mut input = PayToAddressInput::new(outpoint(), SEQUENCE_FINAL);
        assert_eq!(input.add_key(&[0x04; 76]), Err(ScriptError::KeyTooLong(76)));
        assert!(input.pub_key().is_none());
        assert_eq!(
            PayToAddressInput::with_pub_key(outpoint(), &[0x04; 76], SEQUENCE_FINAL),
            Err(ScriptError::KeyTooLong(76))
        );

        input.add_key(&[0x04; 75]).unwrap();
        assert_eq!(input.pub_key().map(<[u8]>::len), Some(75));
    }

    #[test]
    fn test_pay_to_address_placeholder_loads_as_absent() {
        let mut script = vec![0x00, 33];
        script.extend_from_slice(&[0x02; 33]);

        let input = PayToAddressInput::from_pushes(outpoint(), SEQUENCE_FINAL, Vec::new(), vec![0x02; 33]);
        assert!(input.signature().is_none());
        assert_eq!(input.pub_key(), Some(&[0x02; 33][..]));
        assert_eq!(input.build_unlocking_script(ScriptSigMode::Edit).unwrap(), script);

        let empty = PayToAddressInput::from_pushes(outpoint(), SEQUENCE_FINAL, Vec::new(), Vec::new());
        assert_eq!(empty, PayToAddressInput::new(outpoint(), SEQUENCE_FINAL));
        assert_eq!(empty.build_unlocking_script(ScriptSigMode::Edit).unwrap(), vec![0x00, 0x00]);
    }

    #[test]
    fn test_pay_to_address_sign_mode() {
        let key = hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798").unwrap();
        let input = PayToAddressInput::with_pub_key(outpoint(), &key, SEQUENCE_FINAL).unwrap();
        assert_eq!(
            hex::encode(input.build_unlocking_script(ScriptSigMode::Sign).unwrap()),
            "76a914751e76e8199196d454941c45d1b3a323f1433bd688ac"
        );
        assert_eq!(
            PayToAddressInput::new(outpoint(), SEQUENCE_FINAL).build_unlocking_script(ScriptSigMode::Sign),
            Err(ScriptError::NoKeySet)
        );
    }

    #[test]
    fn test_multisig_duplicate_and_unknown_key() {
        let mut input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        assert_eq!(
            input.add_key(&[0x03; 33]),
            Err(ScriptError::DuplicateKey(hex::encode([0x03; 33])))
        );
        assert_eq!(
            input.add_signature(&[0x05; 33], &[0x30; 70], SigHashType::All),
            Err(ScriptError::UnknownKey(hex::encode([0x05; 33])))
        );
        assert_eq!(input.pub_keys().len(), 3);
    }

    #[test]
    fn test_multisig_edit_keeps_every_slot() {
        let mut input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        input.add_signature(&[0x04; 33], &[0x30; 5], SigHashType::All).unwrap();

        let redeem = two_of_three().redeem_script().unwrap();
        let script = input.build_unlocking_script(ScriptSigMode::Edit).unwrap();

        let mut expected = vec![0x00, 0x00, 0x00, 0x06];
        expected.extend_from_slice(&[0x30; 5]);
        expected.push(0x01);
        expected.push(0x4c);
        expected.push(redeem.len() as u8);
        expected.extend_from_slice(&redeem);
        assert_eq!(script, expected);
    }

    #[test]
    fn test_multisig_broadcast_only_signed_slots() {
        let mut input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        input.add_signature(&[0x04; 33], &[0x34; 5], SigHashType::All).unwrap();
        input.add_signature(&[0x02; 33], &[0x32; 5], SigHashType::All).unwrap();
        assert_eq!(input.signature_count(), 2);

        let redeem = two_of_three().redeem_script().unwrap();
        let script = input.build_unlocking_script(ScriptSigMode::Broadcast).unwrap();

        let mut expected = vec![0x00, 0x06];
        expected.extend_from_slice(&[0x32; 5]);
        expected.push(0x01);
        expected.push(0x06);
        expected.extend_from_slice(&[0x34; 5]);
        expected.push(0x01);
        expected.push(0x4c);
        expected.push(redeem.len() as u8);
        expected.extend_from_slice(&redeem);
        assert_eq!(script, expected);
    }

    #[test]
    fn test_multisig_clear_signatures_keeps_keys() {
        let mut input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        input.add_signature(&[0x02; 33], &[0x30; 5], SigHashType::All).unwrap();
        input.clear_signatures();
        assert_eq!(input.signature_count(), 0);
        assert!(input.signature(&[0x02; 33]).is_none());
        assert_eq!(input.pub_keys().len(), 3);
    }

    #[test]
    fn test_multisig_sign_mode_is_redeem_script() {
        let input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        assert_eq!(
            input.build_unlocking_script(ScriptSigMode::Sign).unwrap(),
            two_of_three().redeem_script().unwrap()
        );
    }

    #[test]
    fn test_multisig_add_key_reflected_in_script() {
        let mut input = MultiSigInput::new(outpoint(), &two_of_three(), SEQUENCE_FINAL);
        input.add_key(&[0x05; 33]).unwrap();
        let redeem = input.build_unlocking_script(ScriptSigMode::Sign).unwrap();
        assert_eq!(redeem[redeem.len() - 2], 0x54);

        input.clear_keys();
        assert_eq!(
            input.build_unlocking_script(ScriptSigMode::Broadcast),
            Err(ScriptError::InsufficientKeys { min_sigs: 2, keys: 0 })
        );
    }

    #[test]
    fn test_script_hash_signatures_in_order() {
        let redeem = vec![0x51, 0x01, 0x02, 0x51, 0xae];
        let mut input = ScriptHashInput::new(outpoint(), redeem.clone(), SEQUENCE_FINAL);
        input.add_key(&[0x02; 33]).unwrap();
        input.add_signature(&[], &[0xbb; 3], SigHashType::All).unwrap();
        input.add_signature(&[], &[0xaa; 3], SigHashType::Single).unwrap();

        let expected = vec![
            0x00, 0x04, 0xbb, 0xbb, 0xbb, 0x01, 0x04, 0xaa, 0xaa, 0xaa, 0x03, 0x05, 0x51, 0x01,
            0x02, 0x51, 0xae,
        ];
        for mode in [ScriptSigMode::Broadcast, ScriptSigMode::Edit, ScriptSigMode::Sign] {
            assert_eq!(input.build_unlocking_script(mode).unwrap(), expected);
        }

        input.clear_signatures();
        assert_eq!(
            input.build_unlocking_script(ScriptSigMode::Broadcast).unwrap(),
            vec![0x00, 0x05, 0x51, 0x01, 0x02, 0x51, 0xae]
        );
    }

    #[test]
    fn test_standard_tx_in_dispatch() {
        let key = [0x02; 33];
        let mut input: StandardTxIn =
            PayToAddressInput::with_pub_key(outpoint(), &key, 0xfffffffe).unwrap().into();
        input.add_signature(&key, &[0x30; 4], SigHashType::All).unwrap();

        let raw = input.to_transaction_input(ScriptSigMode::Broadcast).unwrap();
        assert_eq!(raw.prevout, outpoint());
        assert_eq!(raw.sequence, 0xfffffffe);
        assert_eq!(raw.script_sig.len(), 1 + 5 + 1 + 33);
    }
}
