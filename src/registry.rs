//! Tabla fija nombre → módulo.
//!
//! El registry asocia cada nombre de módulo con una función de decode
//! monomorfizada y un constructor de instancia cero. La clave se obtiene
//! llamando a `name()` sobre la instancia cero en el momento del registro,
//! así la auto-consistencia clave == nombre queda garantizada por
//! construcción y no depende de disciplina manual.
//!
//! `REGISTRY` es la tabla global del proceso: se construye una sola vez y
//! es de solo lectura después, segura para lecturas concurrentes sin
//! sincronización.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

use crate::modules::implementations::{FileSearch, Ping, Pkg};
use crate::modules::trait_module::Module;

/// Decode monomorfizado: forma intermedia → instancia concreta en caja.
pub type DecodeFn = fn(&str) -> Result<Box<dyn Module>, serde_json::Error>;

/// Entrada inmutable del registry.
#[derive(Debug, Clone, Copy)]
pub struct ModuleEntry {
    decode: DecodeFn,
    blank: fn() -> Box<dyn Module>,
}

impl ModuleEntry {
    /// Decodifica la forma intermedia en el tipo concreto de la entrada.
    pub fn decode(&self, encoded: &str) -> Result<Box<dyn Module>, serde_json::Error> {
        (self.decode)(encoded)
    }

    /// Instancia cero del tipo, para consultas de metadatos.
    pub fn blank(&self) -> Box<dyn Module> {
        (self.blank)()
    }
}

/// Tabla inmutable de módulos conocidos.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    entries: IndexMap<&'static str, ModuleEntry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Registra un tipo de módulo bajo su propio `name()`.
    ///
    /// # Panics
    /// Si el nombre ya estaba registrado. Es un error de programación y el
    /// proceso debe fallar en el arranque, no durante una resolución.
    pub fn register<M>(&mut self)
    where
        M: Module + Default + DeserializeOwned + 'static,
    {
        let name = M::default().name();
        let previous = self.entries.insert(
            name,
            ModuleEntry {
                decode: decode_into::<M>,
                blank: || Box::new(M::default()),
            },
        );
        assert!(previous.is_none(), "duplicate module name in registry: {name}");
    }

    /// Busca una entrada. La ausencia es un resultado normal, no un error.
    pub fn lookup(&self, name: &str) -> Option<&ModuleEntry> {
        self.entries.get(name)
    }

    /// Instancia cero del módulo `name`, si existe.
    pub fn blank(&self, name: &str) -> Option<Box<dyn Module>> {
        self.lookup(name).map(ModuleEntry::blank)
    }

    /// Nombres registrados, en orden de registro (determinista).
    pub fn module_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn decode_into<M>(encoded: &str) -> Result<Box<dyn Module>, serde_json::Error>
where
    M: Module + DeserializeOwned + 'static,
{
    let module: M = serde_json::from_str(encoded)?;
    Ok(Box::new(module))
}

/// Catálogo global del proceso. Añadir un módulo = un tipo nuevo y una
/// línea `register` aquí; el resolver no cambia.
pub static REGISTRY: Lazy<ModuleRegistry> = Lazy::new(|| {
    let mut registry = ModuleRegistry::new();
    registry.register::<Pkg>();
    registry.register::<FileSearch>();
    registry.register::<Ping>();
    registry
});
