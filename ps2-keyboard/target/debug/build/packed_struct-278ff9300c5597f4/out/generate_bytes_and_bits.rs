bits_type!(Bits::<1>, 1, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<2>, 2, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<3>, 3, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<4>, 4, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<5>, 5, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<6>, 6, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<7>, 7, Bytes::<1>, BitsPartialBytes);
bits_type!(Bits::<8>, 8, Bytes::<1>, BitsFullBytes);
bits_type!(Bits::<9>, 9, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<10>, 10, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<11>, 11, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<12>, 12, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<13>, 13, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<14>, 14, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<15>, 15, Bytes::<2>, BitsPartialBytes);
bits_type!(Bits::<16>, 16, Bytes::<2>, BitsFullBytes);
bits_type!(Bits::<17>, 17, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<18>, 18, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<19>, 19, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<20>, 20, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<21>, 21, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<22>, 22, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<23>, 23, Bytes::<3>, BitsPartialBytes);
bits_type!(Bits::<24>, 24, Bytes::<3>, BitsFullBytes);
bits_type!(Bits::<25>, 25, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<26>, 26, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<27>, 27, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<28>, 28, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<29>, 29, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<30>, 30, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<31>, 31, Bytes::<4>, BitsPartialBytes);
bits_type!(Bits::<32>, 32, Bytes::<4>, BitsFullBytes);
bits_type!(Bits::<33>, 33, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<34>, 34, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<35>, 35, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<36>, 36, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<37>, 37, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<38>, 38, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<39>, 39, Bytes::<5>, BitsPartialBytes);
bits_type!(Bits::<40>, 40, Bytes::<5>, BitsFullBytes);
bits_type!(Bits::<41>, 41, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<42>, 42, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<43>, 43, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<44>, 44, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<45>, 45, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<46>, 46, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<47>, 47, Bytes::<6>, BitsPartialBytes);
bits_type!(Bits::<48>, 48, Bytes::<6>, BitsFullBytes);
bits_type!(Bits::<49>, 49, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<50>, 50, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<51>, 51, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<52>, 52, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<53>, 53, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<54>, 54, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<55>, 55, Bytes::<7>, BitsPartialBytes);
bits_type!(Bits::<56>, 56, Bytes::<7>, BitsFullBytes);
bits_type!(Bits::<57>, 57, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<58>, 58, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<59>, 59, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<60>, 60, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<61>, 61, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<62>, 62, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<63>, 63, Bytes::<8>, BitsPartialBytes);
bits_type!(Bits::<64>, 64, Bytes::<8>, BitsFullBytes);
bits_type!(Bits::<65>, 65, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<66>, 66, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<67>, 67, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<68>, 68, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<69>, 69, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<70>, 70, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<71>, 71, Bytes::<9>, BitsPartialBytes);
bits_type!(Bits::<72>, 72, Bytes::<9>, BitsFullBytes);
bits_type!(Bits::<73>, 73, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<74>, 74, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<75>, 75, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<76>, 76, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<77>, 77, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<78>, 78, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<79>, 79, Bytes::<10>, BitsPartialBytes);
bits_type!(Bits::<80>, 80, Bytes::<10>, BitsFullBytes);
bits_type!(Bits::<81>, 81, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<82>, 82, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<83>, 83, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<84>, 84, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<85>, 85, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<86>, 86, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<87>, 87, Bytes::<11>, BitsPartialBytes);
bits_type!(Bits::<88>, 88, Bytes::<11>, BitsFullBytes);
bits_type!(Bits::<89>, 89, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<90>, 90, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<91>, 91, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<92>, 92, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<93>, 93, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<94>, 94, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<95>, 95, Bytes::<12>, BitsPartialBytes);
bits_type!(Bits::<96>, 96, Bytes::<12>, BitsFullBytes);
bits_type!(Bits::<97>, 97, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<98>, 98, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<99>, 99, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<100>, 100, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<101>, 101, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<102>, 102, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<103>, 103, Bytes::<13>, BitsPartialBytes);
bits_type!(Bits::<104>, 104, Bytes::<13>, BitsFullBytes);
bits_type!(Bits::<105>, 105, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<106>, 106, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<107>, 107, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<108>, 108, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<109>, 109, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<110>, 110, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<111>, 111, Bytes::<14>, BitsPartialBytes);
bits_type!(Bits::<112>, 112, Bytes::<14>, BitsFullBytes);
bits_type!(Bits::<113>, 113, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<114>, 114, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<115>, 115, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<116>, 116, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<117>, 117, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<118>, 118, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<119>, 119, Bytes::<15>, BitsPartialBytes);
bits_type!(Bits::<120>, 120, Bytes::<15>, BitsFullBytes);
bits_type!(Bits::<121>, 121, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<122>, 122, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<123>, 123, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<124>, 124, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<125>, 125, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<126>, 126, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<127>, 127, Bytes::<16>, BitsPartialBytes);
bits_type!(Bits::<128>, 128, Bytes::<16>, BitsFullBytes);
bits_type!(Bits::<129>, 129, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<130>, 130, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<131>, 131, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<132>, 132, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<133>, 133, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<134>, 134, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<135>, 135, Bytes::<17>, BitsPartialBytes);
bits_type!(Bits::<136>, 136, Bytes::<17>, BitsFullBytes);
bits_type!(Bits::<137>, 137, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<138>, 138, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<139>, 139, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<140>, 140, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<141>, 141, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<142>, 142, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<143>, 143, Bytes::<18>, BitsPartialBytes);
bits_type!(Bits::<144>, 144, Bytes::<18>, BitsFullBytes);
bits_type!(Bits::<145>, 145, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<146>, 146, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<147>, 147, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<148>, 148, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<149>, 149, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<150>, 150, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<151>, 151, Bytes::<19>, BitsPartialBytes);
bits_type!(Bits::<152>, 152, Bytes::<19>, BitsFullBytes);
bits_type!(Bits::<153>, 153, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<154>, 154, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<155>, 155, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<156>, 156, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<157>, 157, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<158>, 158, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<159>, 159, Bytes::<20>, BitsPartialBytes);
bits_type!(Bits::<160>, 160, Bytes::<20>, BitsFullBytes);
bits_type!(Bits::<161>, 161, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<162>, 162, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<163>, 163, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<164>, 164, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<165>, 165, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<166>, 166, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<167>, 167, Bytes::<21>, BitsPartialBytes);
bits_type!(Bits::<168>, 168, Bytes::<21>, BitsFullBytes);
bits_type!(Bits::<169>, 169, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<170>, 170, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<171>, 171, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<172>, 172, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<173>, 173, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<174>, 174, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<175>, 175, Bytes::<22>, BitsPartialBytes);
bits_type!(Bits::<176>, 176, Bytes::<22>, BitsFullBytes);
bits_type!(Bits::<177>, 177, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<178>, 178, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<179>, 179, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<180>, 180, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<181>, 181, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<182>, 182, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<183>, 183, Bytes::<23>, BitsPartialBytes);
bits_type!(Bits::<184>, 184, Bytes::<23>, BitsFullBytes);
bits_type!(Bits::<185>, 185, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<186>, 186, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<187>, 187, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<188>, 188, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<189>, 189, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<190>, 190, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<191>, 191, Bytes::<24>, BitsPartialBytes);
bits_type!(Bits::<192>, 192, Bytes::<24>, BitsFullBytes);
bits_type!(Bits::<193>, 193, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<194>, 194, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<195>, 195, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<196>, 196, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<197>, 197, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<198>, 198, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<199>, 199, Bytes::<25>, BitsPartialBytes);
bits_type!(Bits::<200>, 200, Bytes::<25>, BitsFullBytes);
bits_type!(Bits::<201>, 201, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<202>, 202, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<203>, 203, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<204>, 204, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<205>, 205, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<206>, 206, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<207>, 207, Bytes::<26>, BitsPartialBytes);
bits_type!(Bits::<208>, 208, Bytes::<26>, BitsFullBytes);
bits_type!(Bits::<209>, 209, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<210>, 210, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<211>, 211, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<212>, 212, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<213>, 213, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<214>, 214, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<215>, 215, Bytes::<27>, BitsPartialBytes);
bits_type!(Bits::<216>, 216, Bytes::<27>, BitsFullBytes);
bits_type!(Bits::<217>, 217, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<218>, 218, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<219>, 219, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<220>, 220, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<221>, 221, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<222>, 222, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<223>, 223, Bytes::<28>, BitsPartialBytes);
bits_type!(Bits::<224>, 224, Bytes::<28>, BitsFullBytes);
bits_type!(Bits::<225>, 225, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<226>, 226, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<227>, 227, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<228>, 228, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<229>, 229, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<230>, 230, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<231>, 231, Bytes::<29>, BitsPartialBytes);
bits_type!(Bits::<232>, 232, Bytes::<29>, BitsFullBytes);
bits_type!(Bits::<233>, 233, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<234>, 234, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<235>, 235, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<236>, 236, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<237>, 237, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<238>, 238, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<239>, 239, Bytes::<30>, BitsPartialBytes);
bits_type!(Bits::<240>, 240, Bytes::<30>, BitsFullBytes);
bits_type!(Bits::<241>, 241, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<242>, 242, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<243>, 243, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<244>, 244, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<245>, 245, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<246>, 246, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<247>, 247, Bytes::<31>, BitsPartialBytes);
bits_type!(Bits::<248>, 248, Bytes::<31>, BitsFullBytes);
bits_type!(Bits::<249>, 249, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<250>, 250, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<251>, 251, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<252>, 252, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<253>, 253, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<254>, 254, Bytes::<32>, BitsPartialBytes);
bits_type!(Bits::<255>, 255, Bytes::<32>, BitsPartialBytes);
