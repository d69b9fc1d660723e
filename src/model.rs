//! Typed request payload for the initial query.
//!
//! The bureau accepts the applicant as a nested JSON object. Callers can
//! build a `Persona` for a payload that only carries catalog-backed codes,
//! or hand the client any other `Serialize` value when they need a shape
//! these types do not cover.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    AddressType, CivilStatus, Gender, MexicanState, Nationality, ResidenceType, SettlementType,
};

/// Applicant identity block sent in the body of the initial query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub apellido_paterno: String,
    pub apellido_materno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellido_adicional: Option<String>,
    pub primer_nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segundo_nombre: Option<String>,
    pub fecha_nacimiento: NaiveDate,
    #[serde(rename = "RFC")]
    pub rfc: String,
    #[serde(rename = "CURP")]
    pub curp: String,
    pub nacionalidad: Nationality,
    pub residencia: ResidenceType,
    pub estado_civil: CivilStatus,
    pub sexo: Gender,
    #[serde(rename = "claveElectorIFE")]
    pub clave_elector_ife: String,
    pub numero_dependientes: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_defuncion: Option<NaiveDate>,
    pub domicilio: Domicilio,
}

/// Applicant address block nested inside [`Persona`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domicilio {
    pub direccion: String,
    pub colonia_poblacion: String,
    pub delegacion_municipio: String,
    pub ciudad: String,
    pub estado: MexicanState,
    #[serde(rename = "CP")]
    pub cp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_residencia: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_telefono: Option<String>,
    pub tipo_domicilio: AddressType,
    pub tipo_asentamiento: SettlementType,
}

// ----------------------------------------------
//
// Unit tests
//
