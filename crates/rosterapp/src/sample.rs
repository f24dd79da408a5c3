//! Built-in sample roster, used to seed an empty store.
//!
//! Entries go through the same validation as user input when seeded, so a
//! malformed row here is skipped rather than stored.

use crate::model::StudentInput;

const SAMPLE: &[(&str, &str, &str, &str, &str)] = &[
    ("241011402051", "Afdal Laia", "afdal.laia@unpam.ac.id", "Teknik Informatika", "3.45"),
    ("241011400248", "Dimas", "dimas@unpam.ac.id", "Teknik Informatika", "3.78"),
    ("241011402104", "Yehezkiel", "yehezkiel@unpam.ac.id", "Teknik Informatika", "3.12"),
    ("241011400231", "Rozi", "rozi@unpam.ac.id", "Teknik Informatika", "3.89"),
    ("241011400235", "M Ichsan Fachrulrozi", "ichsan.fachrulrozi@unpam.ac.id", "Teknik Informatika", "3.56"),
    ("241011400277", "Bayu Abiakso", "bayu.abiakso@unpam.ac.id", "Teknik Informatika", "3.34"),
    ("241011400233", "Firman Gani", "firman.gani@unpam.ac.id", "Teknik Informatika", "3.67"),
    ("241011401525", "Jiwa", "jiwa@unpam.ac.id", "Teknik Informatika", "3.23"),
    ("241011401536", "Medina", "medina@unpam.ac.id", "Teknik Informatika", "3.91"),
    ("241011401526", "Aldo", "aldo@unpam.ac.id", "Teknik Informatika", "3.45"),
    ("241011401528", "Fadly", "fadly@unpam.ac.id", "Teknik Informatika", "3.72"),
    ("241011402026", "Cristian Yuda", "cristian.yuda@unpam.ac.id", "Teknik Informatika", "3.58"),
    ("241011402315", "Fazri", "fazri@unpam.ac.id", "Teknik Informatika", "3.81"),
    ("241011400266", "AFFAN DHIYA DIL AWAR", "affan.dhiya@unpam.ac.id", "Teknik Informatika", "3.95"),
    ("241011400232", "Rido Maulidan", "rido.maulidan@unpam.ac.id", "Teknik Informatika", "3.47"),
    ("241011400261", "Muzayin", "muzayin@unpam.ac.id", "Teknik Informatika", "3.63"),
    ("241011401769", "Sulthan Arya Satwika", "sulthan.arya@unpam.ac.id", "Teknik Informatika", "3.74"),
    ("241011400276", "Maikel", "maikel@unpam.ac.id", "Teknik Informatika", "3.52"),
    ("241011400268", "Fariz", "fariz@unpam.ac.id", "Teknik Informatika", "3.68"),
    ("241011401936", "Timothy", "timothy@unpam.ac.id", "Teknik Informatika", "3.39"),
    ("241011400228", "Adrian", "adrian@unpam.ac.id", "Teknik Informatika", "3.85"),
    ("241011400253", "Syahrul", "syahrul@unpam.ac.id", "Teknik Informatika", "3.51"),
    ("241011403270", "Faya", "faya@unpam.ac.id", "Teknik Informatika", "3.92"),
    ("241011402755", "Adlina", "adlina@unpam.ac.id", "Teknik Informatika", "3.44"),
    ("241011401655", "Ulya", "ulya@unpam.ac.id", "Teknik Informatika", "3.79"),
    ("2410114002544", "Nia", "nia@unpam.ac.id", "Teknik Informatika", "3.66"),
    ("241011402113", "Elis", "elis@unpam.ac.id", "Teknik Informatika", "3.55"),
    ("241011400269", "Gilang", "gilang@unpam.ac.id", "Teknik Informatika", "3.88"),
];

pub fn sample_inputs() -> Vec<StudentInput> {
    SAMPLE
        .iter()
        .map(|(id, name, email, major, gpa)| StudentInput::new(*id, *name, *email, *major, *gpa))
        .collect()
}
