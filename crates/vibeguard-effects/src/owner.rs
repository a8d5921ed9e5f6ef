use serde::Deserialize;
use serde_json::Value;
use vibeguard_core::OwnerClass;

/// Formas de dono que o fullnode reporta
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
enum RawOwner {
    AddressOwner(String),
    ObjectOwner(String),
    Shared(Value),
    Immutable,
    ConsensusAddressOwner { owner: String },
}

/// Descritor de dono, já reduzido a um conjunto fechado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerDescriptor {
    Address(String),
    Object(String),
    Shared,
    Immutable,
    /// Ausente ou em formato desconhecido
    Unknown,
}

impl OwnerDescriptor {
    pub fn parse(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return OwnerDescriptor::Unknown;
        };
        match serde_json::from_value::<RawOwner>(value.clone()) {
            Ok(RawOwner::AddressOwner(address)) => OwnerDescriptor::Address(address),
            Ok(RawOwner::ConsensusAddressOwner { owner }) => OwnerDescriptor::Address(owner),
            Ok(RawOwner::ObjectOwner(id)) => OwnerDescriptor::Object(id),
            Ok(RawOwner::Shared(_)) => OwnerDescriptor::Shared,
            Ok(RawOwner::Immutable) => OwnerDescriptor::Immutable,
            Err(_) => OwnerDescriptor::Unknown,
        }
    }
}

/// Classifica o dono em relação ao endereço de quem analisa.
///
/// A comparação de endereços diferencia maiúsculas. Dono desconhecido vira
/// `OtherAddress`, para nunca esconder uma saída de fundos.
pub fn classify_owner(descriptor: &OwnerDescriptor, viewer: Option<&str>) -> OwnerClass {
    match descriptor {
        OwnerDescriptor::Address(address) => match viewer {
            Some(viewer) if viewer == address => OwnerClass::You,
            _ => OwnerClass::OtherAddress,
        },
        OwnerDescriptor::Object(_) | OwnerDescriptor::Shared | OwnerDescriptor::Immutable => {
            OwnerClass::Contract
        }
        OwnerDescriptor::Unknown => OwnerClass::OtherAddress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ME: &str = "0x97b3000000000000000000000000000000000000000000000000000000c807";

    fn classify(value: Value, viewer: Option<&str>) -> OwnerClass {
        classify_owner(&OwnerDescriptor::parse(Some(&value)), viewer)
    }

    #[test]
    fn address_owner_compares_with_viewer() {
        assert_eq!(classify(json!({ "AddressOwner": ME }), Some(ME)), OwnerClass::You);
        assert_eq!(
            classify(json!({ "AddressOwner": "0x1234" }), Some(ME)),
            OwnerClass::OtherAddress
        );
        assert_eq!(classify(json!({ "AddressOwner": ME }), None), OwnerClass::OtherAddress);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper = ME.to_uppercase();
        assert_eq!(
            classify(json!({ "AddressOwner": ME }), Some(&upper)),
            OwnerClass::OtherAddress
        );
    }

    #[test]
    fn object_shared_and_immutable_are_contracts() {
        for owner in [
            json!({ "ObjectOwner": "0x5" }),
            json!({ "Shared": { "initial_shared_version": 1 } }),
            json!("Immutable"),
        ] {
            assert_eq!(classify(owner.clone(), Some(ME)), OwnerClass::Contract, "{owner}");
            assert_eq!(classify(owner, None), OwnerClass::Contract);
        }
    }

    #[test]
    fn consensus_address_owner_is_address_owned() {
        let owner = json!({ "ConsensusAddressOwner": { "owner": ME, "start_version": 7 } });
        assert_eq!(classify(owner, Some(ME)), OwnerClass::You);
    }

    #[test]
    fn unknown_descriptors_fail_open() {
        assert_eq!(classify(json!({ "Mystery": 1 }), Some(ME)), OwnerClass::OtherAddress);
        assert_eq!(classify(json!(42), Some(ME)), OwnerClass::OtherAddress);
        assert_eq!(
            classify_owner(&OwnerDescriptor::parse(None), Some(ME)),
            OwnerClass::OtherAddress
        );
    }
}
