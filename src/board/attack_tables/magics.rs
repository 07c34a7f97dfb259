//! Fixed magic multipliers for the slider attack tables.
//!
//! Any alternative set satisfying the perfect-hash property for shifts 55
//! (bishops) and 52 (rooks) would do; these are known-good values. A
//! from-scratch regeneration would randomize candidates and verify the hash
//! property over every occupancy subset of each mask.

#[rustfmt::skip]
pub(super) const BISHOP_MAGICS: [u64; 64] = [
    2305922208415879456,
    2450002178294317056,
    2328361231763636234,
    2315993846590472192,
    2305983888440166400,
    2306001339429195776,
    2308174008291491856,
    2882866730865295488,
    2378399798844721168,
    2308099379008913420,
    2305862835336421376,
    2305844125905356304,
    2956693763453379267,
    2326109487787675650,
    2310348812706648064,
    2314868900839393792,
    2326109216395493408,
    2497282289609749632,
    2900335766238412810,
    2594144871891601408,
    2595209464378425344,
    3602917162634715201,
    2332882203459477568,
    2315413176206009346,
    2307039278183613456,
    2325002549754864896,
    2344688759330832392,
    2632362778293305376,
    2882449447680221184,
    2306969046760947776,
    2551289326449297472,
    2308175073376538656,
    2305896369888166016,
    2378182152322818146,
    2310351011249782800,
    2305915579146961024,
    3476779050306240640,
    2308253139913410560,
    2307144901848203289,
    2306173413011505188,
    2306969562022674692,
    2333014140861809024,
    2379590552761991424,
    3026419087571421184,
    2643657034747085824,
    2316116991893574144,
    2314852408599117840,
    2459000722720556545,
    2307567090695933952,
    3170542959533752836,
    2330624352307388480,
    2341871877234370560,
    2306160836861822976,
    2314991227353174080,
    2307267985145866240,
    3611966071361276032,
    2306986527093692672,
    2306408433337447424,
    2594154768561635460,
    2305896065148190784,
    2594075034700022794,
    2341874349258179218,
    2305845345676959936,
    2306126694052004227,
];

#[rustfmt::skip]
pub(super) const ROOK_MAGICS: [u64; 64] = [
    2630102251644911749,
    2792231804940076050,
    3602884142894944384,
    3602884374854371376,
    2882444567859183648,
    3819054718207131904,
    3746996548371547144,
    2449960544522816515,
    2305852356146827264,
    2305966189949489152,
    2379615842603114496,
    2459106686540066816,
    2308939302711132416,
    2306405976905515520,
    2388044697546260608,
    2603093847498080384,
    2378252721852685312,
    3463833468584069376,
    2306142084968230912,
    2306166265848270912,
    2327236207106461952,
    2306408708013297792,
    2405216870149407236,
    2615834953870508704,
    2306142523321647104,
    2315703431672631296,
    2310346652193398784,
    3242802898069496320,
    2305984846348157440,
    2451227035855553536,
    3458765621922381956,
    2317102567165804800,
    2668382856794996992,
    2346393272928176160,
    2324446814945674304,
    2324983316221005824,
    2306126691820374032,
    2310815000929256448,
    2305915578071646340,
    2305855654671680544,
    2305860876279775232,
    2594091287325982720,
    2319353825462329344,
    2306986501442898432,
    2307127307648635392,
    2310347725575684098,
    2305844385785053192,
    2379307980819550216,
    2305896962601263616,
    2377918231982703104,
    2306406234884243968,
    2305852923074707520,
    2639180042441130560,
    2310364275249545728,
    3891673308382626304,
    3459934412181930080,
    3189534595729261058,
    2346415026938709010,
    3458773585062167042,
    2308099216470315530,
    2630104381961797906,
    2310364759377121322,
    3458770022251497540,
    2341878970410083586,
];
