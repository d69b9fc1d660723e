//! Demo driver: open an RCC report and print the raw bureau response.
//!
//! Reads the TOML config from the first CLI argument, or from the
//! per-user default path when no argument is given. The six follow-up
//! queries stay commented out until a folio from a real response is
//! filled in.

use std::path::PathBuf;

use chrono::NaiveDate;
use rcc_ficoscore_pld::catalog::{
    AddressType, CivilStatus, Gender, MexicanState, Nationality, ResidenceType, SettlementType,
};
use rcc_ficoscore_pld::model::{Domicilio, Persona};
use rcc_ficoscore_pld::{Config, RccClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stdout
    tracing_subscriber::fmt::init();

    // 1) Locate and read the config
    let config_path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => Config::default_path().ok_or("no per-user config directory; pass a config path")?,
    };
    let config = Config::from_file(&config_path)?;

    // 2) Load the bureau certificate, then the signing keystore
    let _bureau_key = ecdsa_lib::load_public_key_from_certificate(&config.public_cert_path)?;
    let client = RccClient::from_config(config)?;

    // 3) Build the applicant payload
    let payload = Persona {
        apellido_paterno: "PATERNO".into(),
        apellido_materno: "MATERNO".into(),
        apellido_adicional: None,
        primer_nombre: "JUAN".into(),
        segundo_nombre: None,
        fecha_nacimiento: NaiveDate::from_ymd_opt(1980, 1, 15).ok_or("bad birth date")?,
        rfc: "PAMP800115".into(),
        curp: "PAMP800115HDFXXX04".into(),
        nacionalidad: Nationality::Mexicana,
        residencia: ResidenceType::Propietario,
        estado_civil: CivilStatus::Soltero,
        sexo: Gender::Masculino,
        clave_elector_ife: "PAMPJN80011509H100".into(),
        numero_dependientes: 0,
        fecha_defuncion: None,
        domicilio: Domicilio {
            direccion: "INSURGENTES SUR 1007".into(),
            colonia_poblacion: "INSURGENTES MIXCOAC".into(),
            delegacion_municipio: "BENITO JUAREZ".into(),
            ciudad: "CIUDAD DE MEXICO".into(),
            estado: MexicanState::CiudadDeMexico,
            cp: "03920".into(),
            fecha_residencia: None,
            numero_telefono: Some("5555555555".into()),
            tipo_domicilio: AddressType::Casa,
            tipo_asentamiento: SettlementType::Colonia,
        },
    };

    // 4) Open the report
    let response = client.retrieve_rcc(&payload)?;
    let status = response.status();
    let body = response.text()?;
    println!("{} {}", status, body);

    // 5) Follow-up sections, once a folio comes back:
    // let folio = "12AB3456";
    // println!("{}", client.retrieve_credits(folio)?.text()?);
    // println!("{}", client.retrieve_addresses(folio)?.text()?);
    // println!("{}", client.retrieve_jobs(folio)?.text()?);
    // println!("{}", client.retrieve_queries(folio)?.text()?);
    // println!("{}", client.retrieve_scores(folio)?.text()?);
    // println!("{}", client.retrieve_messages(folio)?.text()?);

    Ok(())
}
