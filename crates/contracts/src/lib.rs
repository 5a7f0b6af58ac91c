//! Общие типы справочника ресурсов взаимопомощи.
//!
//! Крейт не зависит от DOM: модель ресурса, фиксированное хранилище,
//! фильтр по категории и тексту, а также машина состояний формы
//! предложения ресурса.

pub mod domain;
pub mod enums;
