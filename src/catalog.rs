//! Static catalogs published by the bureau for request fields.
//!
//! Each catalog is a closed set of codes. The enums serialize to the exact
//! wire code (a short string or a small integer), so a payload built from
//! them can never carry a value the bureau does not recognize.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Codes for `tipoDomicilio`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressType {
    #[serde(rename = "N")]
    Negocio,
    #[serde(rename = "O")]
    DomicilioDelOtorgante,
    #[serde(rename = "C")]
    Casa,
    #[serde(rename = "P")]
    ApartadoPostal,
    #[serde(rename = "E")]
    Empleo,
}

impl AddressType {
    pub const ALL: [AddressType; 5] = [
        AddressType::Negocio,
        AddressType::DomicilioDelOtorgante,
        AddressType::Casa,
        AddressType::ApartadoPostal,
        AddressType::Empleo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AddressType::Negocio => "N",
            AddressType::DomicilioDelOtorgante => "O",
            AddressType::Casa => "C",
            AddressType::ApartadoPostal => "P",
            AddressType::Empleo => "E",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `estadoCivil`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivilStatus {
    #[serde(rename = "D")]
    Divorciado,
    #[serde(rename = "L")]
    UnionLibre,
    #[serde(rename = "C")]
    Casado,
    #[serde(rename = "S")]
    Soltero,
    #[serde(rename = "V")]
    Viudo,
    #[serde(rename = "E")]
    Separado,
}

impl CivilStatus {
    pub const ALL: [CivilStatus; 6] = [
        CivilStatus::Divorciado,
        CivilStatus::UnionLibre,
        CivilStatus::Casado,
        CivilStatus::Soltero,
        CivilStatus::Viudo,
        CivilStatus::Separado,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CivilStatus::Divorciado => "D",
            CivilStatus::UnionLibre => "L",
            CivilStatus::Casado => "C",
            CivilStatus::Soltero => "S",
            CivilStatus::Viudo => "V",
            CivilStatus::Separado => "E",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `sexo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Femenino,
    #[serde(rename = "M")]
    Masculino,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Femenino, Gender::Masculino];

    pub fn code(&self) -> &'static str {
        match self {
            Gender::Femenino => "F",
            Gender::Masculino => "M",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `nacionalidad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    #[serde(rename = "MX")]
    Mexicana,
    #[serde(rename = "US")]
    Estadounidense,
    #[serde(rename = "CA")]
    Canadiense,
    #[serde(rename = "GT")]
    Guatemalteca,
    #[serde(rename = "HN")]
    Hondurena,
    #[serde(rename = "SV")]
    Salvadorena,
    #[serde(rename = "CU")]
    Cubana,
    #[serde(rename = "CO")]
    Colombiana,
    #[serde(rename = "VE")]
    Venezolana,
    #[serde(rename = "AR")]
    Argentina,
    #[serde(rename = "ES")]
    Espanola,
    #[serde(rename = "CN")]
    China,
}

impl Nationality {
    pub const ALL: [Nationality; 12] = [
        Nationality::Mexicana,
        Nationality::Estadounidense,
        Nationality::Canadiense,
        Nationality::Guatemalteca,
        Nationality::Hondurena,
        Nationality::Salvadorena,
        Nationality::Cubana,
        Nationality::Colombiana,
        Nationality::Venezolana,
        Nationality::Argentina,
        Nationality::Espanola,
        Nationality::China,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Nationality::Mexicana => "MX",
            Nationality::Estadounidense => "US",
            Nationality::Canadiense => "CA",
            Nationality::Guatemalteca => "GT",
            Nationality::Hondurena => "HN",
            Nationality::Salvadorena => "SV",
            Nationality::Cubana => "CU",
            Nationality::Colombiana => "CO",
            Nationality::Venezolana => "VE",
            Nationality::Argentina => "AR",
            Nationality::Espanola => "ES",
            Nationality::China => "CN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `estado`, the 32 federal entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MexicanState {
    #[serde(rename = "AGS")]
    Aguascalientes,
    #[serde(rename = "BC")]
    BajaCalifornia,
    #[serde(rename = "BCS")]
    BajaCaliforniaSur,
    #[serde(rename = "CAMP")]
    Campeche,
    #[serde(rename = "CHIS")]
    Chiapas,
    #[serde(rename = "CHIH")]
    Chihuahua,
    #[serde(rename = "CDMX")]
    CiudadDeMexico,
    #[serde(rename = "COAH")]
    Coahuila,
    #[serde(rename = "COL")]
    Colima,
    #[serde(rename = "DGO")]
    Durango,
    #[serde(rename = "MEX")]
    EstadoDeMexico,
    #[serde(rename = "GTO")]
    Guanajuato,
    #[serde(rename = "GRO")]
    Guerrero,
    #[serde(rename = "HGO")]
    Hidalgo,
    #[serde(rename = "JAL")]
    Jalisco,
    #[serde(rename = "MICH")]
    Michoacan,
    #[serde(rename = "MOR")]
    Morelos,
    #[serde(rename = "NAY")]
    Nayarit,
    #[serde(rename = "NL")]
    NuevoLeon,
    #[serde(rename = "OAX")]
    Oaxaca,
    #[serde(rename = "PUE")]
    Puebla,
    #[serde(rename = "QRO")]
    Queretaro,
    #[serde(rename = "QROO")]
    QuintanaRoo,
    #[serde(rename = "SLP")]
    SanLuisPotosi,
    #[serde(rename = "SIN")]
    Sinaloa,
    #[serde(rename = "SON")]
    Sonora,
    #[serde(rename = "TAB")]
    Tabasco,
    #[serde(rename = "TAMP")]
    Tamaulipas,
    #[serde(rename = "TLAX")]
    Tlaxcala,
    #[serde(rename = "VER")]
    Veracruz,
    #[serde(rename = "YUC")]
    Yucatan,
    #[serde(rename = "ZAC")]
    Zacatecas,
}

impl MexicanState {
    pub const ALL: [MexicanState; 32] = [
        MexicanState::Aguascalientes,
        MexicanState::BajaCalifornia,
        MexicanState::BajaCaliforniaSur,
        MexicanState::Campeche,
        MexicanState::Chiapas,
        MexicanState::Chihuahua,
        MexicanState::CiudadDeMexico,
        MexicanState::Coahuila,
        MexicanState::Colima,
        MexicanState::Durango,
        MexicanState::EstadoDeMexico,
        MexicanState::Guanajuato,
        MexicanState::Guerrero,
        MexicanState::Hidalgo,
        MexicanState::Jalisco,
        MexicanState::Michoacan,
        MexicanState::Morelos,
        MexicanState::Nayarit,
        MexicanState::NuevoLeon,
        MexicanState::Oaxaca,
        MexicanState::Puebla,
        MexicanState::Queretaro,
        MexicanState::QuintanaRoo,
        MexicanState::SanLuisPotosi,
        MexicanState::Sinaloa,
        MexicanState::Sonora,
        MexicanState::Tabasco,
        MexicanState::Tamaulipas,
        MexicanState::Tlaxcala,
        MexicanState::Veracruz,
        MexicanState::Yucatan,
        MexicanState::Zacatecas,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            MexicanState::Aguascalientes => "AGS",
            MexicanState::BajaCalifornia => "BC",
            MexicanState::BajaCaliforniaSur => "BCS",
            MexicanState::Campeche => "CAMP",
            MexicanState::Chiapas => "CHIS",
            MexicanState::Chihuahua => "CHIH",
            MexicanState::CiudadDeMexico => "CDMX",
            MexicanState::Coahuila => "COAH",
            MexicanState::Colima => "COL",
            MexicanState::Durango => "DGO",
            MexicanState::EstadoDeMexico => "MEX",
            MexicanState::Guanajuato => "GTO",
            MexicanState::Guerrero => "GRO",
            MexicanState::Hidalgo => "HGO",
            MexicanState::Jalisco => "JAL",
            MexicanState::Michoacan => "MICH",
            MexicanState::Morelos => "MOR",
            MexicanState::Nayarit => "NAY",
            MexicanState::NuevoLeon => "NL",
            MexicanState::Oaxaca => "OAX",
            MexicanState::Puebla => "PUE",
            MexicanState::Queretaro => "QRO",
            MexicanState::QuintanaRoo => "QROO",
            MexicanState::SanLuisPotosi => "SLP",
            MexicanState::Sinaloa => "SIN",
            MexicanState::Sonora => "SON",
            MexicanState::Tabasco => "TAB",
            MexicanState::Tamaulipas => "TAMP",
            MexicanState::Tlaxcala => "TLAX",
            MexicanState::Veracruz => "VER",
            MexicanState::Yucatan => "YUC",
            MexicanState::Zacatecas => "ZAC",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `tipoAsentamiento`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementType {
    Colonia,
    Fraccionamiento,
    Pueblo,
    Barrio,
    UnidadHabitacional,
    Ejido,
    Rancho,
    Rancheria,
    Condominio,
    ZonaComercial,
    ZonaIndustrial,
    Residencial,
}

impl SettlementType {
    pub const ALL: [SettlementType; 12] = [
        SettlementType::Colonia,
        SettlementType::Fraccionamiento,
        SettlementType::Pueblo,
        SettlementType::Barrio,
        SettlementType::UnidadHabitacional,
        SettlementType::Ejido,
        SettlementType::Rancho,
        SettlementType::Rancheria,
        SettlementType::Condominio,
        SettlementType::ZonaComercial,
        SettlementType::ZonaIndustrial,
        SettlementType::Residencial,
    ];

    pub fn code(&self) -> u8 {
        match self {
            SettlementType::Colonia => 1,
            SettlementType::Fraccionamiento => 2,
            SettlementType::Pueblo => 3,
            SettlementType::Barrio => 4,
            SettlementType::UnidadHabitacional => 5,
            SettlementType::Ejido => 6,
            SettlementType::Rancho => 7,
            SettlementType::Rancheria => 8,
            SettlementType::Condominio => 9,
            SettlementType::ZonaComercial => 10,
            SettlementType::ZonaIndustrial => 11,
            SettlementType::Residencial => 12,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Codes for `tipoResidencia`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidenceType {
    Propietario,
    Renta,
    ViveConFamiliares,
    ViviendaHipotecada,
    NoDisponible,
}

impl ResidenceType {
    pub const ALL: [ResidenceType; 5] = [
        ResidenceType::Propietario,
        ResidenceType::Renta,
        ResidenceType::ViveConFamiliares,
        ResidenceType::ViviendaHipotecada,
        ResidenceType::NoDisponible,
    ];

    pub fn code(&self) -> u8 {
        match self {
            ResidenceType::Propietario => 1,
            ResidenceType::Renta => 2,
            ResidenceType::ViveConFamiliares => 3,
            ResidenceType::ViviendaHipotecada => 4,
            ResidenceType::NoDisponible => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

// The numeric catalogs go over the wire as plain integers, not as variant
// names, so they carry hand-written serde impls.

impl Serialize for SettlementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for SettlementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown settlement type code {code}")))
    }
}

impl Serialize for ResidenceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ResidenceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown residence type code {code}")))
    }
}

// ----------------------------------------------
//
// Unit tests
//
