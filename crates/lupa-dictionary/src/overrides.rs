//! Hand-curated English→Spanish entries for words and phrases the
//! dictionary source is missing. Merged on top of the derived entries,
//! so these win on collision.

pub const EXTRA_ENTRIES: &[(&str, &[&str])] = &[
    ("air freshener", &["ambientador"]),
    ("allergies", &["alergias"]),
    ("alt", &["alt", "alternativo"]),
    ("american", &["americano"]),
    ("assistive", &["asistencial"]),
    ("backspace", &["retroceso", "borrar"]),
    ("backward", &["atrás"]),
    ("bahai", &["bahai"]),
    ("bezier", &["bezier"]),
    ("bible", &["Biblia"]),
    ("biking", &["bicicleta"]),
    ("box", &["caja"]),
    ("bullhorn", &["megáfono"]),
    ("campground", &["camping"]),
    ("capsule", &["cápsula"]),
    ("caret", &["intercalación", "intercalar"]),
    ("chart", &["gráfico"]),
    ("chevron", &["cheurón"]),
    ("combined", &["combinado"]),
    ("crescent", &["creciente"]),
    ("crossbones", &["calavera"]),
    ("crosshairs", &["punto de mira"]),
    ("dharmachakra", &["dharmachakra", "dharma", "chakra"]),
    ("dna", &["adn"]),
    ("dolly", &["carro", "muñequita", "rodante"]),
    ("dropper", &["gotas"]),
    ("dumpster", &["contenedor de basura", "basura"]),
    ("eject", &["Botón de expulsión", "expulsar"]),
    ("europe", &["europa"]),
    ("exclamation", &["punto de exclamación", "exclamación"]),
    ("eye dropper", &["cuentagotas"]),
    ("faucet", &["grifo"]),
    ("flatbed", &["plataforma"]),
    ("flushed", &["sonrojada"]),
    ("font", &["fuente"]),
    ("freshener", &["ambientador"]),
    ("gamepad", &["controlador"]),
    ("genderless", &["sin género"]),
    ("greater", &["mayor que", "mas que"]),
    ("hamsa", &["hamsa"]),
    ("hanukiah", &["hanukiah"]),
    ("hashtag", &["hashtag"]),
    ("hdd", &["disco duro"]),
    ("headset", &["auriculares", "audifonos"]),
    ("hippo", &["hipopótamo", "hipo"]),
    ("hockey", &["hockey"]),
    ("hot tub", &["Bañera de hidromasaje", "jacuzi"]),
    ("hotdog", &["salchicha", "hot dog"]),
    ("id", &["identification", "carnet"]),
    ("inbox", &["bandeja de entrada"]),
    ("indent", &["sangrar", "sangría de párrafo "]),
    ("info", &["informacion"]),
    ("injured", &["herida"]),
    ("interpret", &["interpret"]),
    ("lightbulb", &["foco"]),
    ("marked", &["marcado"]),
    ("marker", &["marcador"]),
    ("maximize", &["maximizar"]),
    ("medical", &["médica"]),
    ("medkit", &["Botiquín"]),
    ("microchip", &["pastilla"]),
    ("numeric", &["numerico"]),
    ("outdent", &["desangrada", "sangrada"]),
    ("paperclip", &["clip de papel", "clip", "gancho"]),
    ("pastafarianism", &["pastafarianismo"]),
    ("pen nib", &["plumilla"]),
    ("pickup", &["camión"]),
    ("piggy bank", &["hucha"]),
    ("piggy", &["chancho", "puerco"]),
    ("powerpoint", &["powerpoint"]),
    ("qrcode", &["código qr"]),
    ("quran", &["córan"]),
    ("radiation", &["radiación"]),
    ("raised", &["levantado"]),
    ("republican", &["republicano"]),
    ("retro", &["retro", "viejo"]),
    ("retweet", &["retuitear"]),
    ("sd card", &["tarjeta sd", "flash"]),
    ("shekel", &["siclo"]),
    ("shipping", &["Envío"]),
    ("shopping", &["compras"]),
    ("shuttle van", &["furgoneta lanzadera"]),
    ("sim card", &["chip", "sim card"]),
    ("sitemap", &["mapa del sitio"]),
    ("skull crossbones", &["calavera"]),
    ("sliders", &["deslizadores"]),
    ("spinner", &["hilandera"]),
    ("splotch", &["mancha"]),
    ("spock", &["spock"]),
    ("stamp", &["sello"]),
    ("steelpan", &["sartén de acero", "acero"]),
    ("strikethrough", &["tachada"]),
    ("subscript", &["subíndice"]),
    ("superscript", &["sobrescrita"]),
    ("swatchbook", &["muestrario", "libro de muestras"]),
    ("sync", &["sincronizar"]),
    ("tachograph", &["tacógrafo"]),
    ("tachometer", &["tachometer", "metro"]),
    ("teeth", &["dientes"]),
    ("th", &["ventana"]),
    ("torah", &["tora"]),
    ("tshirt", &["camiseta"]),
    ("tub", &["tina"]),
    ("tv", &["tele", "televisor", "televisión"]),
    ("ungroup", &["grupo"]),
    ("unlink", &["desconectar", "desactivar"]),
    ("usa", &["usa", "eeuu"]),
    ("usd", &["usd"]),
    ("utensil", &["utensilio"]),
    ("van", &["furgoneta"]),
    ("vial", &["frasca"]),
    ("vinyl", &["vinilo"]),
    ("voicemail", &["mensaje de voz", "audio"]),
    ("vr", &["realidad virtual"]),
    ("wired", &["cableado"]),
    ("won", &["ganar"]),
    ("yea", &["sí"]),
];

/// The table in the owned form the dictionary builder merges.
pub fn entries() -> impl Iterator<Item = (String, Vec<String>)> {
    EXTRA_ENTRIES.iter().map(|(english, terms)| {
        (
            (*english).to_owned(),
            terms.iter().map(|t| (*t).to_owned()).collect(),
        )
    })
}
