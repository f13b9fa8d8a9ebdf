pub mod prelude {
    pub use super::{
        inventory::INVENTORY,
        records::{Address, EmergencyContact, Record},
        states::{postal_code_matches, StateZipRange, STATE_ZIP_RANGES},
    };
}

pub mod states;

pub mod records {
    use serde::{Deserialize, Serialize};

    /// Domain model for a synthetic client-support purchase.
    ///
    /// Field order is the serialized order. Nullable fields are written as
    /// `null`, never skipped.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Record {
        pub txid: String,
        pub rfid: String,
        pub item: String,
        pub purchase_time: String,
        pub expiration_time: String,
        pub days: u8,
        pub name: String,
        pub address: Option<Address>,
        pub phone: Option<String>,
        pub email: Option<String>,
        pub emergency_contact: Option<EmergencyContact>,
    }

    /// A US mailing address. `postalcode` always falls inside `state`.
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Address {
        pub street_address: String,
        pub city: String,
        pub state: String,
        pub postalcode: String,
    }

    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct EmergencyContact {
        pub name: String,
        pub phone: String,
    }

}

pub mod inventory {
    /// Vehicle models a record's `item` is drawn from.
    pub const INVENTORY: [&str; 29] = [
        "Peugeot 208",
        "Peugeot 3008",
        "Citroen C3",
        "Renault Megane",
        "Fiat 500e",
        "Maserati Grecale Folgore",
        "Renault Mégane E-Tech",
        "Peugeot e-208",
        "Peugeot e-3008",
        "Citroen ë-C4",
        "Citroen Ami",
        "DS 3 E-Tense",
        "DS 4 E-Tense",
        "DS 7 E-Tense",
        "DS 9 E-Tense",
        "Fiat 600e",
        "Jeep Avenger EV",
        "Opel Mokka-e",
        "Opel Corsa-e",
        "Opel Astra Electric",
        "Peugeot e-2008",
        "Citroen ë-Berlingo",
        "Fiat E-Ulysse",
        "Peugeot e-Rifter",
        "Jeep Recon EV",
        "Jeep Wagoneer S",
        "Maserati GranTurismo Folgore",
        "Maserati MC20 Folgore",
        "Opel Zafira-e Life",
    ];

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashSet;

        #[test]
        fn test_inventory_entries_are_distinct() {
            let unique: HashSet<_> = INVENTORY.iter().collect();
            assert_eq!(unique.len(), 29);
        }
    }
}
