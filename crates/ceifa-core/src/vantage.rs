//! The vantage catalog (point-buy advantages).
//!
//! Only a handful of vantages carry flat numeric bonuses the engine can
//! apply (hp/al/st/speed, and the armor bonus of `blindado`); the rest
//! are table rulings carried as display text.

/// Point cost of a vantage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    /// Fixed cost in vantage points.
    Fixed(u32),
    /// Costs one point per level taken.
    Variable,
}

/// Flat numeric bonuses granted per vantage level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VantageBonuses {
    /// Bonus to max HP.
    pub hp: i32,
    /// Bonus to max AL (soul energy).
    pub al: i32,
    /// Bonus to max ST (stamina).
    pub st: i32,
    /// Bonus to speed.
    pub speed: i32,
}

/// Static definition of one vantage.
#[derive(Debug, Clone, Copy)]
pub struct VantageDef {
    /// Catalog id (stable key stored on characters).
    pub id: &'static str,
    /// Portuguese display name.
    pub name: &'static str,
    /// Rules text, as printed on the sheet.
    pub description: &'static str,
    /// Point cost.
    pub cost: Cost,
    /// Maximum level (1 for non-leveled vantages).
    pub max_level: u32,
    /// Flat bonuses applied per level.
    pub bonuses: VantageBonuses,
}

/// Flat armor bonus of the mutually-exclusive `blindado` vantage,
/// applied to exactly one chosen armor kind.
pub const BLINDADO_ARMOR: i32 = 3;

const fn flat(id: &'static str, name: &'static str, description: &'static str, cost: u32) -> VantageDef {
    VantageDef {
        id,
        name,
        description,
        cost: Cost::Fixed(cost),
        max_level: 1,
        bonuses: VantageBonuses {
            hp: 0,
            al: 0,
            st: 0,
            speed: 0,
        },
    }
}

/// The full vantage catalog, in sheet order.
pub static VANTAGES: &[VantageDef] = &[
    // Variáveis
    VantageDef {
        id: "corpo_ferro",
        name: "Corpo de Ferro",
        description: "+4 HP por nível (1-5)",
        cost: Cost::Variable,
        max_level: 5,
        bonuses: VantageBonuses {
            hp: 4,
            al: 0,
            st: 0,
            speed: 0,
        },
    },
    VantageDef {
        id: "alma_abundante",
        name: "Alma Abundante",
        description: "+5 AL por nível (1-5)",
        cost: Cost::Variable,
        max_level: 5,
        bonuses: VantageBonuses {
            hp: 0,
            al: 5,
            st: 0,
            speed: 0,
        },
    },
    VantageDef {
        id: "energia_sobra",
        name: "Energia de Sobra",
        description: "+5 ST por nível (1-5)",
        cost: Cost::Variable,
        max_level: 5,
        bonuses: VantageBonuses {
            hp: 0,
            al: 0,
            st: 5,
            speed: 0,
        },
    },
    VantageDef {
        id: "ligeiro",
        name: "Ligeiro",
        description: "+4 Velocidade por nível (1-3)",
        cost: Cost::Variable,
        max_level: 3,
        bonuses: VantageBonuses {
            hp: 0,
            al: 0,
            st: 0,
            speed: 4,
        },
    },
    // 1 Ponto
    flat(
        "resistencia_mental",
        "Resistência Mental",
        "+2 para resistir a efeitos de medo ou pânico",
        1,
    ),
    flat(
        "vigoroso",
        "Vigoroso",
        "Recebe em 1.5x do que receberia de recuperação",
        1,
    ),
    flat("ladrao", "Ladrão", "+2 em furtos e arrombamentos", 1),
    flat(
        "noturno",
        "Noturno",
        "+2 em Observação à noite/locais escuros",
        1,
    ),
    flat(
        "discreto",
        "Discreto",
        "+2 em Furtividade fora de combate",
        1,
    ),
    // 2 Pontos
    flat(
        "blindado",
        "Blindado",
        "+3 de Armadura Física ou Espiritual (Escolha Única)",
        2,
    ),
    flat(
        "estudioso",
        "Estudioso",
        "Reduz 1/4 do XP para criar técnicas e +1 em Sabedoria",
        2,
    ),
    flat(
        "resistente",
        "Resistente",
        "Imunidade contra qualquer veneno (Rank C ou inferior)",
        2,
    ),
    flat(
        "ambidestro",
        "Ambidestro",
        "+1 ataque múltiplo básico sem técnica por turno",
        2,
    ),
    flat(
        "aura_inquebravel",
        "Aura Inquebrável",
        "+2 para resistir a efeitos negativos mentais ou na alma",
        2,
    ),
    flat(
        "olhos_aguia",
        "Olhos de Águia",
        "+2 em testes de Observação à distância",
        2,
    ),
    // 3 Pontos
    flat(
        "lutador",
        "Lutador",
        "Ignora 3 da Armadura do alvo com golpes físicos",
        3,
    ),
    flat(
        "lancador",
        "Lançador",
        "Usa Destreza em vez de Percepção para arremessar projéteis",
        3,
    ),
    flat(
        "especialista",
        "Especialista",
        "+2 para Defender usando técnicas",
        3,
    ),
    flat(
        "mentalidade_forte",
        "Mentalidade Forte",
        "+2 para resistir à Insanidade",
        3,
    ),
    flat(
        "briguento",
        "Briguento",
        "+2 para atacar sem uma Arma Demoníaca",
        3,
    ),
    flat(
        "alma_veloz",
        "Alma Veloz",
        "Reduz custo de ST de técnicas de Combate em -2 sem Arma",
        3,
    ),
    flat(
        "sensorial",
        "Sensorial",
        "Desbloqueia a Percepção de Alma, e ganha +2 para esses testes",
        3,
    ),
    flat(
        "carcereiro",
        "Carcereiro",
        "Técnicas de aprisionamento têm dificuldade +2",
        3,
    ),
    flat(
        "estudioso_runico",
        "Estudioso Rúnico",
        "+2 para entender, decifrar e confeccionar runas",
        3,
    ),
    flat(
        "ressonante_experiente",
        "Ressonante Experiente",
        "Transformar e equipar companion como ação livre",
        3,
    ),
    // 4 Pontos
    flat(
        "medico",
        "Médico",
        "Aplica o dobro de cura total com técnicas",
        4,
    ),
    flat(
        "arcanista",
        "Arcanista",
        "Escolhe causar Dano Natural com Porte ou Força",
        4,
    ),
    flat(
        "barbaro",
        "Bárbaro",
        "Ataques e técnicas de Combate com Força em vez de Destreza",
        4,
    ),
    flat(
        "mago",
        "Mago",
        "Ataques e técnicas de Magia com Inteligência em vez de Porte",
        4,
    ),
    flat(
        "elusivo",
        "Elusivo",
        "Ataques e técnicas de Ressonância com Destreza em vez de Porte",
        4,
    ),
    // 5 Pontos
    flat(
        "conversor",
        "Conversor",
        "Converte AL em ST e vice-versa livremente (Ação Secundária)",
        5,
    ),
    flat(
        "constante",
        "Constante",
        "Realiza golpes e técnicas sem Ressonância como Ação Secundária",
        5,
    ),
    flat(
        "inabalavel",
        "Inabalável",
        "Limite de morte em -50%. Não fica incapacitado com 0 HP/AL",
        5,
    ),
    flat(
        "sortudo",
        "Sortudo",
        "Dobra número de dados de contagem de turnos em técnicas",
        5,
    ),
    flat(
        "loucos_sabem",
        "Só os Loucos Sabem",
        "Anula penalidades de Insanidade e permite benefícios de Coragem Neutra",
        5,
    ),
    flat(
        "multiformas",
        "Multiformas",
        "Pode mudar de forma seguindo um tema (limite 4 formas)",
        5,
    ),
    // 6 Pontos
    flat(
        "trio_ternura",
        "Trio Ternura",
        "Recebe um Companion Arma Demoníaca extra",
        6,
    ),
    flat(
        "nexo_almas",
        "Nexo de Almas",
        "Rolar usando perícia de um e atributo do outro (Vinculado)",
        6,
    ),
    flat(
        "dia_cada_vez",
        "Um Dia de Cada Vez",
        "Pode rolar novamente qualquer dado UMA VEZ por dia",
        6,
    ),
    flat(
        "essencia_bivalente",
        "Essência Bivalente",
        "Escolhe um tipo adicional de Classe de Arma",
        6,
    ),
];

/// Look up a vantage by catalog id.
pub fn vantage(id: &str) -> Option<&'static VantageDef> {
    VANTAGES.iter().find(|v| v.id == id)
}
